//! Session repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use crate::domain::Session;
use crate::errors::AppResult;

/// Raw session persistence. Expiry rules live in the session service.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert the session, or overwrite the row holding the same token
    async fn upsert(&self, session: Session) -> AppResult<()>;

    /// Find a session by token regardless of expiry
    async fn find(&self, token: &str) -> AppResult<Option<Session>>;

    /// Delete a session; deleting an absent token is not an error
    async fn delete(&self, token: &str) -> AppResult<()>;
}

/// Concrete implementation of SessionRepository
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn upsert(&self, session: Session) -> AppResult<()> {
        let active_model = ActiveModel {
            token: Set(session.token),
            user_id: Set(session.user_id),
            expires_at: Set(session.expires_at),
            created_at: Set(session.created_at),
        };

        SessionEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(session::Column::Token)
                    .update_columns([
                        session::Column::UserId,
                        session::Column::ExpiresAt,
                        session::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    async fn find(&self, token: &str) -> AppResult<Option<Session>> {
        let result = SessionEntity::find_by_id(token.to_owned())
            .one(&self.db)
            .await?;

        Ok(result.map(Session::from))
    }

    async fn delete(&self, token: &str) -> AppResult<()> {
        SessionEntity::delete_by_id(token.to_owned())
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
