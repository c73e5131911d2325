//! HTTP request handlers.

pub mod auth_handler;
pub mod company_handler;
pub mod dashboard_handler;
pub mod sale_handler;
pub mod scrap_item_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use company_handler::company_routes;
pub use dashboard_handler::{dashboard_routes, scrap_types};
pub use sale_handler::sale_routes;
pub use scrap_item_handler::{scrap_item_admin_routes, scrap_item_routes};
pub use user_handler::user_routes;
