//! Dashboard aggregator - role-scoped, read-only statistics.

use async_trait::async_trait;
use std::sync::Arc;

use super::parallel;
use crate::domain::{AdminStats, DashboardStats, ScrapStatus, TransactionType, User, UserStats};
use crate::errors::AppResult;
use crate::infra::{ItemFilter, UnitOfWork};

#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Global figures for admins, own-item figures for everyone else
    async fn stats(&self, actor: &User) -> AppResult<DashboardStats>;
}

pub struct DashboardAggregator<U: UnitOfWork> {
    uow: Arc<U>,
}

/// Item counts by status under one filter
struct ItemCounts {
    total: u64,
    pending: u64,
    approved: u64,
    sold: u64,
}

impl<U: UnitOfWork> DashboardAggregator<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn item_counts(&self, filter: ItemFilter) -> AppResult<ItemCounts> {
        let items = self.uow.scrap_items();

        let (total, pending, approved, sold) = parallel::join4(
            items.count(filter),
            items.count(filter.with_status(ScrapStatus::Pending)),
            items.count(filter.with_status(ScrapStatus::Approved)),
            items.count(filter.with_status(ScrapStatus::Sold)),
        )
        .await?;

        Ok(ItemCounts {
            total,
            pending,
            approved,
            sold,
        })
    }

    async fn admin_stats(&self) -> AppResult<AdminStats> {
        let sales = self.uow.sales();
        let companies = self.uow.companies();

        let (counts, totals, total_companies) = parallel::join3(
            self.item_counts(ItemFilter::default()),
            sales.totals(),
            companies.count(),
        )
        .await?;

        Ok(AdminStats {
            total_scrap_items: counts.total,
            pending_items: counts.pending,
            approved_items: counts.approved,
            sold_items: counts.sold,
            total_revenue: totals.revenue,
            total_profit: totals.profit,
            total_companies,
        })
    }

    async fn user_stats(&self, user: &User) -> AppResult<UserStats> {
        let ledger = self.uow.ledger();

        let (counts, total_earnings) = parallel::join2(
            self.item_counts(ItemFilter::owned_by(user.id)),
            ledger.sum_for_user(user.id, TransactionType::Sell),
        )
        .await?;

        Ok(UserStats {
            total_items: counts.total,
            pending_items: counts.pending,
            approved_items: counts.approved,
            sold_items: counts.sold,
            total_earnings,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardAggregator<U> {
    async fn stats(&self, actor: &User) -> AppResult<DashboardStats> {
        if actor.is_admin() {
            Ok(DashboardStats::Admin(self.admin_stats().await?))
        } else {
            Ok(DashboardStats::User(self.user_stats(actor).await?))
        }
    }
}
