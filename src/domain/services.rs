use crate::domain::model::{Order, Payment, UserProfile};
use crate::domain::ports::{Authenticator, OrderRepository, PaymentRepository, UserStore};
use crate::utils::error::{Result, SampleError};
use std::collections::HashMap;

pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn find(&self, id: u64) -> Result<Order> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(SampleError::NotFoundError { entity: "order", id })
    }
}

pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Payment> {
        self.repo.find_by_id(id).await?.ok_or(SampleError::NotFoundError {
            entity: "payment",
            id,
        })
    }
}

pub struct UserService<A: Authenticator, S: UserStore> {
    auth: A,
    store: S,
}

impl<A: Authenticator, S: UserStore> UserService<A, S> {
    pub fn new(auth: A, store: S) -> Self {
        Self { auth, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 認證使用者，成功時記錄登入
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if !self.auth.validate(username, password).await? {
            return Err(SampleError::AuthenticationError {
                username: username.to_string(),
            });
        }

        self.store.log_login(username).await?;
        Ok(())
    }

    /// 更新使用者資料，需要權限
    pub async fn update_profile(
        &self,
        user_id: u64,
        fields: HashMap<String, serde_json::Value>,
    ) -> Result<UserProfile> {
        if !self.auth.check_permission(user_id).await? {
            return Err(SampleError::PermissionError { user_id });
        }

        self.store.update_user(user_id, fields).await
    }
}
