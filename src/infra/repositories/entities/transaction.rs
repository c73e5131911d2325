//! Ledger entry database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Transaction, TransactionType};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub scrap_item_id: Uuid,
    pub amount: f64,
    /// `buy` or `sell`
    pub transaction_type: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: model.id,
            user_id: model.user_id,
            scrap_item_id: model.scrap_item_id,
            amount: model.amount,
            transaction_type: model.transaction_type.parse::<TransactionType>()?,
            created_at: model.created_at,
        })
    }
}
