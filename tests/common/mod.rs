//! Shared fixtures for integration tests.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied, real sea-orm stores, and a mocked identity provider.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use scrap_market::config::Config;
use scrap_market::domain::{NewScrapItem, ProviderProfile, User, UserRole};
use scrap_market::errors::AppResult;
use scrap_market::infra::{Database, IdentityProvider, UserRepository, UserStore};
use scrap_market::services::{ServiceContainer, Services};
use scrap_market::AppState;

mock! {
    pub Provider {}

    #[async_trait]
    impl IdentityProvider for Provider {
        async fn fetch_session_data(&self, exchange_id: &str) -> AppResult<ProviderProfile>;
    }
}

pub struct TestContext {
    pub db: Arc<Database>,
    pub services: Services,
    pub config: Config,
}

impl TestContext {
    /// Router state backed by this context's services
    pub fn state(&self) -> AppState {
        AppState::from_services(&self.services, self.db.clone(), self.config.clone())
    }
}

pub async fn setup() -> TestContext {
    setup_with_provider(MockProvider::new()).await
}

pub async fn setup_with_provider(provider: MockProvider) -> TestContext {
    let db = Arc::new(
        Database::connect("sqlite::memory:")
            .await
            .expect("in-memory database should start"),
    );
    let config = Config::default();
    let services = Services::from_connection(db.get_connection(), config.clone(), Arc::new(provider));

    TestContext {
        db,
        services,
        config,
    }
}

pub fn profile(email: &str, name: &str, session_token: &str) -> ProviderProfile {
    ProviderProfile {
        id: format!("provider-{}", email),
        email: email.to_string(),
        name: name.to_string(),
        picture: Some(format!("https://avatars.example/{}.png", name)),
        session_token: session_token.to_string(),
    }
}

pub async fn create_user(ctx: &TestContext, email: &str, role: UserRole) -> User {
    UserStore::new(ctx.db.get_connection())
        .insert_if_absent(email.to_string(), email.to_string(), None, role)
        .await
        .expect("user insert should succeed")
}

/// Create a user and give them an active session under `token`
pub async fn login_as(ctx: &TestContext, email: &str, role: UserRole, token: &str) -> User {
    let user = create_user(ctx, email, role).await;
    start_session(ctx, &user, token, Utc::now()).await;
    user
}

pub async fn start_session(ctx: &TestContext, user: &User, token: &str, at: DateTime<Utc>) {
    ctx.services
        .sessions()
        .create_or_refresh(token.to_string(), user.id, at)
        .await
        .expect("session upsert should succeed");
}

pub fn new_item(price_offered: f64) -> NewScrapItem {
    NewScrapItem {
        scrap_type: "Metal".to_string(),
        weight: 12.5,
        price_offered,
        description: Some("Copper pipes".to_string()),
    }
}
