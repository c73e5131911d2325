//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserRole};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Make sure the bootstrap administrator exists.
    ///
    /// Idempotent: an existing record with this email is returned unchanged.
    async fn ensure_admin(&self, email: &str, name: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn ensure_admin(&self, email: &str, name: &str) -> AppResult<User> {
        let users = self.uow.users();

        if let Some(existing) = users.find_by_email(email).await? {
            if !existing.is_admin() {
                tracing::warn!(
                    email = %email,
                    "Reserved admin email belongs to a non-admin user"
                );
            }
            tracing::info!(user_id = %existing.id, "Admin user already present");
            return Ok(existing);
        }

        let admin = users
            .insert_if_absent(email.to_string(), name.to_string(), None, UserRole::Admin)
            .await?;
        tracing::info!(user_id = %admin.id, email = %email, "Admin user created");
        Ok(admin)
    }
}
