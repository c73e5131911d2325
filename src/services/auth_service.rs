//! Authentication service - identity exchange and the request gates.
//!
//! Login is delegated to an external identity provider. This service
//! trades the provider's exchange id for a profile, provisions the local
//! user on first sight and records the provider-issued session token.
//! Every protected operation resolves its caller through [`AuthService::authenticate`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::SessionService;
use crate::config::Config;
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{IdentityProvider, UnitOfWork};

/// Result of a successful profile exchange
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginOutcome {
    pub user: User,
    /// Session token to present as cookie or bearer credential
    #[schema(example = "st_2f1c9a...")]
    pub session_token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// URL of the hosted login page
    fn login_url(&self) -> String;

    /// Trade an exchange id for a local user and an active session.
    ///
    /// A missing exchange id fails with `BadRequest` before the provider is called.
    async fn exchange_profile(
        &self,
        exchange_id: Option<String>,
        now: DateTime<Utc>,
    ) -> AppResult<LoginOutcome>;

    /// Resolve a session token to its user
    async fn authenticate(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<User>;

    /// Like [`AuthService::authenticate`], additionally requiring the admin role
    async fn authorize_admin(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<User>;

    /// Revoke the presented session, if any
    async fn logout(&self, token: Option<&str>) -> AppResult<()>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    sessions: Arc<dyn SessionService>,
    identity: Arc<dyn IdentityProvider>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(
        uow: Arc<U>,
        sessions: Arc<dyn SessionService>,
        identity: Arc<dyn IdentityProvider>,
        config: Config,
    ) -> Self {
        Self {
            uow,
            sessions,
            identity,
            config,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    fn login_url(&self) -> String {
        self.config.login_url()
    }

    async fn exchange_profile(
        &self,
        exchange_id: Option<String>,
        now: DateTime<Utc>,
    ) -> AppResult<LoginOutcome> {
        let exchange_id = exchange_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::bad_request("Session ID required"))?;

        let profile = self.identity.fetch_session_data(&exchange_id).await?;

        // Email is the natural key; an existing record keeps its name and avatar
        let user = self
            .uow
            .users()
            .insert_if_absent(profile.email, profile.name, profile.picture, UserRole::User)
            .await?;

        let session = self
            .sessions
            .create_or_refresh(profile.session_token, user.id, now)
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            session_token: session.token,
        })
    }

    async fn authenticate(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<User> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let user_id = self
            .sessions
            .lookup(token, now)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // A dangling session reads as unauthenticated, not as a missing user
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    async fn authorize_admin(&self, token: Option<&str>, now: DateTime<Utc>) -> AppResult<User> {
        let user = self.authenticate(token, now).await?;
        user.ensure_admin()?;
        Ok(user)
    }

    async fn logout(&self, token: Option<&str>) -> AppResult<()> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.sessions.delete(token).await?;
            tracing::info!("Session revoked");
        }
        Ok(())
    }
}
