//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management. Admin-only operations take the
//! acting user and check its role themselves, so no caller can skip it.

mod auth_service;
mod company_service;
pub mod container;
mod dashboard_service;
mod sale_service;
mod scrap_item_service;
mod session_service;
mod user_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, LoginOutcome};
pub use company_service::{CompanyManager, CompanyService};
pub use dashboard_service::{DashboardAggregator, DashboardService};
pub use sale_service::{SaleManager, SaleService};
pub use scrap_item_service::{ScrapItemManager, ScrapItemService};
pub use session_service::{SessionManager, SessionService};
pub use user_service::{UserManager, UserService};
