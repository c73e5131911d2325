//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod company;
pub mod sale;
pub mod scrap_item;
pub mod session;
pub mod transaction;
pub mod user;
