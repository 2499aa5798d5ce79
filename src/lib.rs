pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DatasetConfig;

pub use adapters::{
    InMemoryOrderRepository, InMemoryPaymentRepository, InMemoryUserStore, LocalStorage,
    StaticAuthenticator,
};
pub use core::{engine::ExportEngine, export::DatasetExporter};
pub use domain::services::{OrderService, PaymentService, UserService};
pub use utils::error::{Result, SampleError};
