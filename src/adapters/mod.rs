pub mod fs;
pub mod memory;

pub use fs::LocalStorage;
pub use memory::{
    InMemoryOrderRepository, InMemoryPaymentRepository, InMemoryUserStore, StaticAuthenticator,
};
