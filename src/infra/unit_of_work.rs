//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Keeps multi-row workflows (submission, sale) atomic

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    IsolationLevel, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    self, CompanyRepository, CompanyStore, LedgerRepository, LedgerStore, SaleRepository,
    SaleStore, ScrapItemRepository, ScrapItemStore, SessionRepository, SessionStore,
    UserRepository, UserStore,
};
use crate::domain::{NewScrapItem, Sale, ScrapItem, ScrapStatus, Transaction, TransactionType};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, use an in-memory SQLite connection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn sessions(&self) -> Arc<dyn SessionRepository>;

    fn scrap_items(&self) -> Arc<dyn ScrapItemRepository>;

    fn companies(&self) -> Arc<dyn CompanyRepository>;

    fn sales(&self) -> Arc<dyn SaleRepository>;

    fn ledger(&self) -> Arc<dyn LedgerRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn scrap_items(&self) -> TxScrapItemRepository<'_> {
        TxScrapItemRepository { txn: self.txn }
    }

    pub fn sales(&self) -> TxSaleRepository<'_> {
        TxSaleRepository { txn: self.txn }
    }

    pub fn ledger(&self) -> TxLedgerRepository<'_> {
        TxLedgerRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    session_repo: Arc<SessionStore>,
    scrap_item_repo: Arc<ScrapItemStore>,
    company_repo: Arc<CompanyStore>,
    sale_repo: Arc<SaleStore>,
    ledger_repo: Arc<LedgerStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            session_repo: Arc::new(SessionStore::new(db.clone())),
            scrap_item_repo: Arc::new(ScrapItemStore::new(db.clone())),
            company_repo: Arc::new(CompanyStore::new(db.clone())),
            sale_repo: Arc::new(SaleStore::new(db.clone())),
            ledger_repo: Arc::new(LedgerStore::new(db.clone())),
            db,
        }
    }

    async fn begin(&self) -> AppResult<DatabaseTransaction> {
        let txn = match self.db.get_database_backend() {
            // SQLite has a single writer and no per-transaction isolation
            DatabaseBackend::Sqlite => self.db.begin().await?,
            _ => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::ReadCommitted),
                        Some(AccessMode::ReadWrite),
                    )
                    .await?
            }
        };
        Ok(txn)
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.session_repo.clone()
    }

    fn scrap_items(&self) -> Arc<dyn ScrapItemRepository> {
        self.scrap_item_repo.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.company_repo.clone()
    }

    fn sales(&self) -> Arc<dyn SaleRepository> {
        self.sale_repo.clone()
    }

    fn ledger(&self) -> Arc<dyn LedgerRepository> {
        self.ledger_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.begin().await?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware scrap item repository.
pub struct TxScrapItemRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxScrapItemRepository<'a> {
    /// Insert a new `pending` item
    pub async fn create(
        &self,
        owner: Uuid,
        item: NewScrapItem,
        now: DateTime<Utc>,
    ) -> AppResult<ScrapItem> {
        repositories::insert_item(self.txn, owner, item, now).await
    }

    /// Conditional status move; false when the item is no longer in `from`
    pub async fn transition(
        &self,
        id: Uuid,
        from: ScrapStatus,
        to: ScrapStatus,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        repositories::transition_status(self.txn, id, from, to, now).await
    }
}

/// Transaction-aware sale repository.
pub struct TxSaleRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxSaleRepository<'a> {
    pub async fn create(&self, sale: Sale) -> AppResult<Sale> {
        repositories::insert_sale(self.txn, sale).await
    }
}

/// Transaction-aware ledger writer.
pub struct TxLedgerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxLedgerRepository<'a> {
    pub async fn append(
        &self,
        user_id: Uuid,
        scrap_item_id: Uuid,
        amount: f64,
        kind: TransactionType,
        now: DateTime<Utc>,
    ) -> AppResult<Transaction> {
        repositories::append_entry(self.txn, user_id, scrap_item_id, amount, kind, now).await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
