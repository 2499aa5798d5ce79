pub mod calculator;
pub mod engine;
pub mod export;
pub mod text;

pub use crate::domain::model::{ExportResult, SampleSet};
pub use crate::domain::ports::{ConfigProvider, Exporter, Storage};
pub use crate::utils::error::Result;
