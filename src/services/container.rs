//! Service Container - Centralized service access with parallel execution support.
//!
//! Features:
//! - Centralized access to all application services
//! - Thread-safe concurrent access via Arc
//! - Parallel execution utilities for independent operations

use std::future::Future;
use std::sync::Arc;

use super::{
    AuthService, Authenticator, CompanyManager, CompanyService, DashboardAggregator,
    DashboardService, SaleManager, SaleService, ScrapItemManager, ScrapItemService,
    SessionManager, SessionService, UserManager, UserService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{IdentityProvider, Persistence};

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn sessions(&self) -> Arc<dyn SessionService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn scrap_items(&self) -> Arc<dyn ScrapItemService>;

    fn companies(&self) -> Arc<dyn CompanyService>;

    fn sales(&self) -> Arc<dyn SaleService>;

    fn dashboard(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    session_service: Arc<dyn SessionService>,
    user_service: Arc<dyn UserService>,
    scrap_item_service: Arc<dyn ScrapItemService>,
    company_service: Arc<dyn CompanyService>,
    sale_service: Arc<dyn SaleService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create service container from database connection, config and identity provider
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let session_service: Arc<dyn SessionService> = Arc::new(SessionManager::new(uow.clone()));

        Self {
            auth_service: Arc::new(Authenticator::new(
                uow.clone(),
                session_service.clone(),
                identity,
                config,
            )),
            session_service,
            user_service: Arc::new(UserManager::new(uow.clone())),
            scrap_item_service: Arc::new(ScrapItemManager::new(uow.clone())),
            company_service: Arc::new(CompanyManager::new(uow.clone())),
            sale_service: Arc::new(SaleManager::new(uow.clone())),
            dashboard_service: Arc::new(DashboardAggregator::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn scrap_items(&self) -> Arc<dyn ScrapItemService> {
        self.scrap_item_service.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyService> {
        self.company_service.clone()
    }

    fn sales(&self) -> Arc<dyn SaleService> {
        self.sale_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
///
/// If any operation fails, its error is returned and the others are dropped.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(
        f1: F1,
        f2: F2,
        f3: F3,
    ) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute four independent async operations in parallel.
    pub async fn join4<F1, F2, F3, F4, T1, T2, T3, T4>(
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
    ) -> AppResult<(T1, T2, T3, T4)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
        F4: Future<Output = AppResult<T4>>,
    {
        try_join!(f1, f2, f3, f4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join4_propagates_error() {
        async fn ok(n: u64) -> AppResult<u64> {
            Ok(n)
        }
        async fn fail() -> AppResult<u64> {
            Err(AppError::NotFound("Scrap item"))
        }

        let result = parallel::join4(ok(1), ok(2), fail(), ok(4)).await;
        assert!(matches!(result, Err(AppError::NotFound("Scrap item"))));
    }
}
