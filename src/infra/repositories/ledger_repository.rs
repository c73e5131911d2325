//! Ledger (money movement) repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::transaction::{self, ActiveModel, Entity as TransactionEntity};
use crate::domain::{Transaction, TransactionType};
use crate::errors::AppResult;

/// Read side of the append-only ledger. Writes go through the unit of work.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Entries for one item, oldest first; the audit read used by the integration tests
    async fn list_for_item(&self, scrap_item_id: Uuid) -> AppResult<Vec<Transaction>>;

    /// Sum of amounts charged to `user_id` of the given type; zero when none
    async fn sum_for_user(&self, user_id: Uuid, kind: TransactionType) -> AppResult<f64>;
}

pub struct LedgerStore {
    db: DatabaseConnection,
}

impl LedgerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerRepository for LedgerStore {
    async fn list_for_item(&self, scrap_item_id: Uuid) -> AppResult<Vec<Transaction>> {
        TransactionEntity::find()
            .filter(transaction::Column::ScrapItemId.eq(scrap_item_id))
            .order_by_asc(transaction::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    async fn sum_for_user(&self, user_id: Uuid, kind: TransactionType) -> AppResult<f64> {
        let total: Option<Option<f64>> = TransactionEntity::find()
            .select_only()
            .column_as(transaction::Column::Amount.sum(), "total")
            .filter(transaction::Column::UserId.eq(user_id))
            .filter(transaction::Column::TransactionType.eq(kind.as_str()))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }
}

/// Append one ledger entry.
pub(crate) async fn append_entry<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    scrap_item_id: Uuid,
    amount: f64,
    kind: TransactionType,
    now: chrono::DateTime<chrono::Utc>,
) -> AppResult<Transaction> {
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        scrap_item_id: Set(scrap_item_id),
        amount: Set(amount),
        transaction_type: Set(kind.as_str().to_string()),
        created_at: Set(now),
    };

    let model = active_model.insert(conn).await?;
    Transaction::try_from(model)
}
