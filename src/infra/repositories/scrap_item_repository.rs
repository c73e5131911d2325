//! Scrap item repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::scrap_item::{self, ActiveModel, Entity as ScrapItemEntity};
use super::entities::user;
use crate::domain::{NewScrapItem, ScrapItem, ScrapItemWithOwner, ScrapStatus};
use crate::errors::{AppError, AppResult};

/// Optional restrictions for counting items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter {
    pub owner: Option<Uuid>,
    pub status: Option<ScrapStatus>,
}

impl ItemFilter {
    pub fn owned_by(owner: Uuid) -> Self {
        Self {
            owner: Some(owner),
            status: None,
        }
    }

    pub fn with_status(mut self, status: ScrapStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[async_trait]
pub trait ScrapItemRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ScrapItem>>;

    /// Items owned by one user, oldest first
    async fn list_by_owner(&self, owner: Uuid) -> AppResult<Vec<ScrapItem>>;

    /// Every item joined with its owner's name and email, oldest first
    async fn list_with_owner(&self) -> AppResult<Vec<ScrapItemWithOwner>>;

    /// Overwrite the status and bump `updated_at`. Returns false when no item matched.
    async fn set_status(&self, id: Uuid, status: ScrapStatus, now: DateTime<Utc>)
        -> AppResult<bool>;

    async fn count(&self, filter: ItemFilter) -> AppResult<u64>;
}

pub struct ScrapItemStore {
    db: DatabaseConnection,
}

impl ScrapItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScrapItemRepository for ScrapItemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ScrapItem>> {
        find_item(&self.db, id).await
    }

    async fn list_by_owner(&self, owner: Uuid) -> AppResult<Vec<ScrapItem>> {
        ScrapItemEntity::find()
            .filter(scrap_item::Column::UserId.eq(owner))
            .order_by_asc(scrap_item::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(ScrapItem::try_from)
            .collect()
    }

    async fn list_with_owner(&self) -> AppResult<Vec<ScrapItemWithOwner>> {
        let rows = ScrapItemEntity::find()
            .find_also_related(user::Entity)
            .order_by_asc(scrap_item::Column::CreatedAt)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(item, owner)| {
                let owner = owner.ok_or_else(|| {
                    AppError::internal(format!("scrap item {} has no owner", item.id))
                })?;
                Ok(ScrapItemWithOwner::new(
                    ScrapItem::try_from(item)?,
                    owner.name,
                    owner.email,
                ))
            })
            .collect()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ScrapStatus,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = ScrapItemEntity::update_many()
            .col_expr(scrap_item::Column::Status, Expr::value(status.as_str()))
            .col_expr(scrap_item::Column::UpdatedAt, Expr::value(now))
            .filter(scrap_item::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self, filter: ItemFilter) -> AppResult<u64> {
        let mut query = ScrapItemEntity::find();
        if let Some(owner) = filter.owner {
            query = query.filter(scrap_item::Column::UserId.eq(owner));
        }
        if let Some(status) = filter.status {
            query = query.filter(scrap_item::Column::Status.eq(status.as_str()));
        }

        Ok(query.count(&self.db).await?)
    }
}

async fn find_item<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<ScrapItem>> {
    ScrapItemEntity::find_by_id(id)
        .one(conn)
        .await?
        .map(ScrapItem::try_from)
        .transpose()
}

/// Insert a new `pending` item owned by `owner`.
pub(crate) async fn insert_item<C: ConnectionTrait>(
    conn: &C,
    owner: Uuid,
    item: NewScrapItem,
    now: DateTime<Utc>,
) -> AppResult<ScrapItem> {
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(owner),
        scrap_type: Set(item.scrap_type),
        weight: Set(item.weight),
        price_offered: Set(item.price_offered),
        status: Set(ScrapStatus::Pending.as_str().to_string()),
        description: Set(item.description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(conn).await?;
    ScrapItem::try_from(model)
}

/// Move an item from `from` to `to` only if it is still in `from`.
///
/// Returns false when the item is missing or was moved by someone else.
pub(crate) async fn transition_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    from: ScrapStatus,
    to: ScrapStatus,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    let result = ScrapItemEntity::update_many()
        .col_expr(scrap_item::Column::Status, Expr::value(to.as_str()))
        .col_expr(scrap_item::Column::UpdatedAt, Expr::value(now))
        .filter(scrap_item::Column::Id.eq(id))
        .filter(scrap_item::Column::Status.eq(from.as_str()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}
