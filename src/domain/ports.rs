use crate::domain::model::{ExportResult, Order, Payment, SampleSet, UserProfile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_path(&self) -> Option<&str>;
    fn seed_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: u64) -> Result<Option<Order>>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_by_id(&self, id: u64) -> Result<Option<Payment>>;
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn validate(&self, username: &str, password: &str) -> Result<bool>;
    async fn check_permission(&self, user_id: u64) -> Result<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn log_login(&self, username: &str) -> Result<()>;
    async fn update_user(
        &self,
        user_id: u64,
        fields: HashMap<String, serde_json::Value>,
    ) -> Result<UserProfile>;
}

#[async_trait]
pub trait Exporter: Send + Sync {
    async fn collect(&self) -> Result<SampleSet>;
    async fn derive(&self, set: SampleSet) -> Result<ExportResult>;
    async fn write(&self, result: ExportResult) -> Result<String>;
}
