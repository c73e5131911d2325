//! Sale of an approved scrap item to a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Company, ScrapItem};

/// A recorded sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sale {
    pub id: Uuid,
    pub scrap_item_id: Uuid,
    pub company_id: Uuid,
    #[schema(example = 150.0)]
    pub selling_price: f64,
    /// Selling price minus the owner's offered price; may be negative
    #[schema(example = 50.0)]
    pub profit: f64,
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    pub fn profit_for(selling_price: f64, price_offered: f64) -> f64 {
        selling_price - price_offered
    }
}

/// Data needed to record a sale.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub scrap_item_id: Uuid,
    pub company_id: Uuid,
    pub selling_price: f64,
}

/// Admin listing row: a sale with its item and company embedded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaleDetails {
    pub id: Uuid,
    pub scrap_item_id: Uuid,
    pub company_id: Uuid,
    pub selling_price: f64,
    pub profit: f64,
    pub sold_at: DateTime<Utc>,
    pub scrap_item: ScrapItem,
    pub company: Company,
}

impl SaleDetails {
    pub fn new(sale: Sale, scrap_item: ScrapItem, company: Company) -> Self {
        Self {
            id: sale.id,
            scrap_item_id: sale.scrap_item_id,
            company_id: sale.company_id,
            selling_price: sale.selling_price,
            profit: sale.profit,
            sold_at: sale.sold_at,
            scrap_item,
            company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_is_difference() {
        assert_eq!(Sale::profit_for(150.0, 100.0), 50.0);
    }

    #[test]
    fn test_profit_can_be_negative() {
        assert_eq!(Sale::profit_for(80.0, 100.0), -20.0);
    }
}
