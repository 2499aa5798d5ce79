use crate::domain::model::{Order, Payment, UserProfile};
use crate::domain::ports::{Authenticator, OrderRepository, PaymentRepository, UserStore};
use crate::utils::error::{Result, SampleError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<u64, Order>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id, o)).collect(),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Order>> {
        Ok(self.orders.get(&id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: HashMap<u64, Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new(payments: impl IntoIterator<Item = Payment>) -> Self {
        Self {
            payments: payments.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Payment>> {
        Ok(self.payments.get(&id).cloned())
    }
}

/// Credential table checked as-is; permission is a plain id allowlist.
#[derive(Debug, Default)]
pub struct StaticAuthenticator {
    credentials: HashMap<String, String>,
    privileged: HashSet<u64>,
}

impl StaticAuthenticator {
    pub fn new(
        credentials: impl IntoIterator<Item = (String, String)>,
        privileged: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            credentials: credentials.into_iter().collect(),
            privileged: privileged.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn validate(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self
            .credentials
            .get(username)
            .is_some_and(|stored| stored == password))
    }

    async fn check_permission(&self, user_id: u64) -> Result<bool> {
        Ok(self.privileged.contains(&user_id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    logins: Mutex<Vec<String>>,
    profiles: Mutex<HashMap<u64, UserProfile>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_count(&self, username: &str) -> usize {
        self.logins
            .lock()
            .map(|logins| logins.iter().filter(|l| l.as_str() == username).count())
            .unwrap_or(0)
    }

    pub fn profile(&self, user_id: u64) -> Option<UserProfile> {
        self.profiles
            .lock()
            .ok()
            .and_then(|profiles| profiles.get(&user_id).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn log_login(&self, username: &str) -> Result<()> {
        let mut logins = self.logins.lock().map_err(|_| SampleError::ProcessingError {
            message: "login log is poisoned".to_string(),
        })?;
        logins.push(username.to_string());
        Ok(())
    }

    async fn update_user(
        &self,
        user_id: u64,
        fields: HashMap<String, serde_json::Value>,
    ) -> Result<UserProfile> {
        let mut profiles = self
            .profiles
            .lock()
            .map_err(|_| SampleError::ProcessingError {
                message: "profile table is poisoned".to_string(),
            })?;

        let profile = profiles.entry(user_id).or_insert_with(|| UserProfile {
            user_id,
            fields: HashMap::new(),
        });
        profile.fields.extend(fields);

        Ok(profile.clone())
    }
}
