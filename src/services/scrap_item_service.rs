//! Scrap item workflow - submission, listings and status changes.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewScrapItem, ScrapItem, ScrapItemWithOwner, ScrapStatus, TransactionType, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[async_trait]
pub trait ScrapItemService: Send + Sync {
    /// Create a `pending` item for `owner` together with its `buy` ledger entry
    async fn submit(&self, owner: &User, item: NewScrapItem) -> AppResult<ScrapItem>;

    /// Items owned by `owner`
    async fn list_mine(&self, owner: &User) -> AppResult<Vec<ScrapItem>>;

    /// Every item with its owner's name and email (admin only)
    async fn list_all_with_owner(&self, actor: &User) -> AppResult<Vec<ScrapItemWithOwner>>;

    /// Overwrite an item's status (admin only).
    ///
    /// Any of the four statuses is accepted; no transition graph is enforced.
    async fn set_status(&self, actor: &User, item_id: Uuid, status: ScrapStatus) -> AppResult<()>;
}

pub struct ScrapItemManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ScrapItemManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ScrapItemService for ScrapItemManager<U> {
    async fn submit(&self, owner: &User, item: NewScrapItem) -> AppResult<ScrapItem> {
        item.ensure_valid()?;

        let owner_id = owner.id;
        let now = Utc::now();

        let created = with_transaction!(self.uow, |ctx| {
            let created = ctx.scrap_items().create(owner_id, item, now).await?;
            ctx.ledger()
                .append(
                    owner_id,
                    created.id,
                    created.price_offered,
                    TransactionType::Buy,
                    now,
                )
                .await?;
            Ok(created)
        })?;

        tracing::info!(item_id = %created.id, user_id = %owner_id, "Scrap item submitted");
        Ok(created)
    }

    async fn list_mine(&self, owner: &User) -> AppResult<Vec<ScrapItem>> {
        self.uow.scrap_items().list_by_owner(owner.id).await
    }

    async fn list_all_with_owner(&self, actor: &User) -> AppResult<Vec<ScrapItemWithOwner>> {
        actor.ensure_admin()?;
        self.uow.scrap_items().list_with_owner().await
    }

    async fn set_status(&self, actor: &User, item_id: Uuid, status: ScrapStatus) -> AppResult<()> {
        actor.ensure_admin()?;

        let updated = self
            .uow
            .scrap_items()
            .set_status(item_id, status, Utc::now())
            .await?;
        if !updated {
            return Err(AppError::NotFound("Scrap item"));
        }

        tracing::info!(item_id = %item_id, status = %status, "Scrap item status changed");
        Ok(())
    }
}
