//! Ledger entries recording money movement tied to a scrap item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Written when an item is submitted, for the offered price
    Buy,
    /// Written when an item is sold, for the selling price
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            other => Err(AppError::internal(format!("Unknown transaction type '{}'", other))),
        }
    }
}

/// Append-only ledger entry.
///
/// `user_id` is always the item's original owner, including for `sell`
/// entries created by an administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub scrap_item_id: Uuid,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>,
}
