//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The identity provider client
//! - Unit of Work for transaction management

pub mod db;
pub mod identity;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use identity::{HttpIdentityProvider, IdentityProvider};
pub use repositories::{
    CompanyRepository, CompanyStore, ItemFilter, LedgerRepository, LedgerStore, SaleRepository,
    SaleStore, SaleTotals, ScrapItemRepository, ScrapItemStore, SessionRepository, SessionStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxLedgerRepository, TxSaleRepository, TxScrapItemRepository,
    UnitOfWork,
};
