//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Query bodies are written once against `ConnectionTrait` so the
//! transaction-scoped repositories in the unit of work reuse them.

mod company_repository;
pub(crate) mod entities;
mod ledger_repository;
mod sale_repository;
mod scrap_item_repository;
mod session_repository;
mod user_repository;

pub use company_repository::{CompanyRepository, CompanyStore};
pub use ledger_repository::{LedgerRepository, LedgerStore};
pub use sale_repository::{SaleRepository, SaleStore, SaleTotals};
pub use scrap_item_repository::{ItemFilter, ScrapItemRepository, ScrapItemStore};
pub use session_repository::{SessionRepository, SessionStore};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use ledger_repository::append_entry;
pub(crate) use sale_repository::insert_sale;
pub(crate) use scrap_item_repository::{insert_item, transition_status};
