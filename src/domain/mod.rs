//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO persistence dependencies.
//! Contains: Entities, Value Objects, state rules.

pub mod company;
pub mod dashboard;
pub mod sale;
pub mod scrap_item;
pub mod session;
pub mod transaction;
pub mod user;

pub use company::{Company, NewCompany};
pub use dashboard::{AdminStats, DashboardStats, UserStats};
pub use sale::{NewSale, Sale, SaleDetails};
pub use scrap_item::{NewScrapItem, ScrapItem, ScrapItemWithOwner, ScrapStatus};
pub use session::{ProviderProfile, Session};
pub use transaction::{Transaction, TransactionType};
pub use user::{User, UserRole};
