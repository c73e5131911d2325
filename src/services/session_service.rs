//! Session lifecycle - issuing, resolving and revoking session tokens.
//!
//! Expiry is checked on every lookup; a stale row is deleted the first
//! time it is presented after expiry. There is no background sweep.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Session;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait SessionService: Send + Sync {
    /// Bind `token` to `user_id` for the next seven days, replacing any prior binding
    async fn create_or_refresh(
        &self,
        token: String,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Session>;

    /// Resolve a token to its user, treating expired sessions as absent
    async fn lookup(&self, token: &str, now: DateTime<Utc>) -> AppResult<Option<Uuid>>;

    /// Revoke a token; unknown tokens are ignored
    async fn delete(&self, token: &str) -> AppResult<()>;
}

pub struct SessionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SessionManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SessionService for SessionManager<U> {
    async fn create_or_refresh(
        &self,
        token: String,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Session> {
        let session = Session::issue(token, user_id, now);
        self.uow.sessions().upsert(session.clone()).await?;
        Ok(session)
    }

    async fn lookup(&self, token: &str, now: DateTime<Utc>) -> AppResult<Option<Uuid>> {
        let sessions = self.uow.sessions();

        match sessions.find(token).await? {
            Some(session) if session.is_active_at(now) => Ok(Some(session.user_id)),
            Some(session) => {
                tracing::debug!(user_id = %session.user_id, "Evicting expired session");
                sessions.delete(token).await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> AppResult<()> {
        self.uow.sessions().delete(token).await
    }
}
