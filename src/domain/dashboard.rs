//! Role-scoped dashboard statistics.

use serde::Serialize;
use utoipa::ToSchema;

/// Global figures shown to administrators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AdminStats {
    pub total_scrap_items: u64,
    pub pending_items: u64,
    pub approved_items: u64,
    pub sold_items: u64,
    /// Sum of all selling prices
    pub total_revenue: f64,
    /// Sum of all sale profits
    pub total_profit: f64,
    pub total_companies: u64,
}

/// Figures scoped to the calling user's own items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct UserStats {
    pub total_items: u64,
    pub pending_items: u64,
    pub approved_items: u64,
    pub sold_items: u64,
    /// Sum of the user's `sell` ledger entries
    pub total_earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DashboardStats {
    Admin(AdminStats),
    User(UserStats),
}
