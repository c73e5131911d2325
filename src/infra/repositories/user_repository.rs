//! User repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user unless one with this email exists, then return the stored row.
    ///
    /// First write wins: an existing user is returned unchanged.
    async fn insert_if_absent(
        &self,
        email: String,
        name: String,
        picture: Option<String>,
        role: UserRole,
    ) -> AppResult<User>;

    /// Count users holding the given email (0 or 1); used to check the admin bootstrap
    async fn count_by_email(&self, email: &str) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn insert_if_absent(
        &self,
        email: String,
        name: String,
        picture: Option<String>,
        role: UserRole,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.clone()),
            name: Set(name),
            picture: Set(picture),
            role: Set(role.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        // Concurrent first logins race on the unique email; the loser re-reads
        UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} vanished after insert", email)))
    }

    async fn count_by_email(&self, email: &str) -> AppResult<u64> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count)
    }
}
