//! Sale repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::sale::{self, ActiveModel, Entity as SaleEntity};
use super::entities::{company, scrap_item};
use crate::domain::{Company, Sale, SaleDetails, ScrapItem};
use crate::errors::{AppError, AppResult};

/// Aggregate revenue and profit over every recorded sale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaleTotals {
    pub revenue: f64,
    pub profit: f64,
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// The sale recorded for an item, if any; read by the integration tests
    async fn find_by_item(&self, scrap_item_id: Uuid) -> AppResult<Option<Sale>>;

    /// Every sale with its item and company embedded, oldest first
    async fn list_details(&self) -> AppResult<Vec<SaleDetails>>;

    /// Sums of selling price and profit; zero when there are no sales
    async fn totals(&self) -> AppResult<SaleTotals>;
}

pub struct SaleStore {
    db: DatabaseConnection,
}

impl SaleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleRepository for SaleStore {
    async fn find_by_item(&self, scrap_item_id: Uuid) -> AppResult<Option<Sale>> {
        let result = SaleEntity::find()
            .filter(sale::Column::ScrapItemId.eq(scrap_item_id))
            .one(&self.db)
            .await?;

        Ok(result.map(Sale::from))
    }

    async fn list_details(&self) -> AppResult<Vec<SaleDetails>> {
        let rows = SaleEntity::find()
            .find_also_related(scrap_item::Entity)
            .order_by_asc(sale::Column::SoldAt)
            .all(&self.db)
            .await?;

        let company_ids: Vec<Uuid> = rows.iter().map(|(sale, _)| sale.company_id).collect();
        let companies: HashMap<Uuid, Company> = if company_ids.is_empty() {
            HashMap::new()
        } else {
            company::Entity::find()
                .filter(company::Column::Id.is_in(company_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|model| (model.id, Company::from(model)))
                .collect()
        };

        rows.into_iter()
            .map(|(sale, item)| {
                let item = item.ok_or_else(|| {
                    AppError::internal(format!("sale {} references a missing item", sale.id))
                })?;
                let company = companies.get(&sale.company_id).cloned().ok_or_else(|| {
                    AppError::internal(format!("sale {} references a missing company", sale.id))
                })?;
                Ok(SaleDetails::new(
                    Sale::from(sale),
                    ScrapItem::try_from(item)?,
                    company,
                ))
            })
            .collect()
    }

    async fn totals(&self) -> AppResult<SaleTotals> {
        let sums: Option<(Option<f64>, Option<f64>)> = SaleEntity::find()
            .select_only()
            .column_as(sale::Column::SellingPrice.sum(), "total_revenue")
            .column_as(sale::Column::Profit.sum(), "total_profit")
            .into_tuple()
            .one(&self.db)
            .await?;

        let (revenue, profit) = sums.unwrap_or((None, None));
        Ok(SaleTotals {
            revenue: revenue.unwrap_or(0.0),
            profit: profit.unwrap_or(0.0),
        })
    }
}

pub(crate) async fn insert_sale<C: ConnectionTrait>(conn: &C, sale: Sale) -> AppResult<Sale> {
    let active_model = ActiveModel {
        id: Set(sale.id),
        scrap_item_id: Set(sale.scrap_item_id),
        company_id: Set(sale.company_id),
        selling_price: Set(sale.selling_price),
        profit: Set(sale.profit),
        sold_at: Set(sale.sold_at),
    };

    let model = active_model.insert(conn).await?;
    Ok(Sale::from(model))
}
