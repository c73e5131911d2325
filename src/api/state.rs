//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, IdentityProvider};
use crate::services::{
    AuthService, CompanyService, DashboardService, SaleService, ScrapItemService,
    ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub scrap_item_service: Arc<dyn ScrapItemService>,
    pub company_service: Arc<dyn CompanyService>,
    pub sale_service: Arc<dyn SaleService>,
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
    /// Immutable process-wide configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state from a database, config and identity provider.
    pub fn from_config(
        database: Arc<Database>,
        config: Config,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone(), identity);
        Self::from_services(&container, database, config)
    }

    /// Build the state from an existing service container.
    pub fn from_services(
        container: &impl ServiceContainer,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            scrap_item_service: container.scrap_items(),
            company_service: container.companies(),
            sale_service: container.sales(),
            dashboard_service: container.dashboard(),
            database,
            config: Arc::new(config),
        }
    }
}
