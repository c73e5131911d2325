//! Sale workflow - selling approved items to partner companies.
//!
//! A sale, the item's move to `sold` and the owner's `sell` ledger entry
//! are written in one transaction. The status move is conditional on the
//! item still being `approved`, so concurrent sales of one item cannot
//! both succeed.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewSale, Sale, SaleDetails, ScrapStatus, TransactionType, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

const NOT_APPROVED: &str = "Can only sell approved scrap items";

#[async_trait]
pub trait SaleService: Send + Sync {
    /// Record a sale of an `approved` item (admin only)
    async fn sell(&self, actor: &User, sale: NewSale) -> AppResult<Sale>;

    /// Every sale with its item and company (admin only)
    async fn list_all(&self, actor: &User) -> AppResult<Vec<SaleDetails>>;
}

pub struct SaleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SaleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SaleService for SaleManager<U> {
    async fn sell(&self, actor: &User, sale: NewSale) -> AppResult<Sale> {
        actor.ensure_admin()?;

        if !sale.selling_price.is_finite() || sale.selling_price < 0.0 {
            return Err(AppError::validation("selling_price: must not be negative"));
        }

        let item = self
            .uow
            .scrap_items()
            .find_by_id(sale.scrap_item_id)
            .await?
            .ok_or(AppError::NotFound("Scrap item"))?;

        if item.status != ScrapStatus::Approved {
            return Err(AppError::invalid_state(NOT_APPROVED));
        }

        if self.uow.companies().find_by_id(sale.company_id).await?.is_none() {
            return Err(AppError::NotFound("Company"));
        }

        let now = Utc::now();
        let record = Sale {
            id: Uuid::new_v4(),
            scrap_item_id: item.id,
            company_id: sale.company_id,
            selling_price: sale.selling_price,
            profit: Sale::profit_for(sale.selling_price, item.price_offered),
            sold_at: now,
        };
        let owner_id = item.user_id;

        let created = with_transaction!(self.uow, |ctx| {
            let moved = ctx
                .scrap_items()
                .transition(record.scrap_item_id, ScrapStatus::Approved, ScrapStatus::Sold, now)
                .await?;
            if !moved {
                return Err(AppError::invalid_state(NOT_APPROVED));
            }

            let created = ctx.sales().create(record).await?;
            ctx.ledger()
                .append(
                    owner_id,
                    created.scrap_item_id,
                    created.selling_price,
                    TransactionType::Sell,
                    now,
                )
                .await?;
            Ok(created)
        })?;

        tracing::info!(
            sale_id = %created.id,
            item_id = %created.scrap_item_id,
            profit = created.profit,
            "Sale recorded"
        );
        Ok(created)
    }

    async fn list_all(&self, actor: &User) -> AppResult<Vec<SaleDetails>> {
        actor.ensure_admin()?;
        self.uow.sales().list_details().await
    }
}
