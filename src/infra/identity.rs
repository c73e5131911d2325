//! Client for the external identity provider.
//!
//! The provider hands the browser a short-lived exchange id after login;
//! the backend trades it for the verified profile and a session token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::{Config, EXCHANGE_ID_HEADER};
use crate::domain::ProviderProfile;
use crate::errors::{AppError, AppResult};

/// Identity provider seam.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Trade an exchange id for the user's verified profile and session token
    async fn fetch_session_data(&self, exchange_id: &str) -> AppResult<ProviderProfile>;
}

/// HTTP implementation backed by reqwest.
pub struct HttpIdentityProvider {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpIdentityProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("scrap-market/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.identity_provider_url.clone(),
            Duration::from_secs(config.identity_provider_timeout_secs),
        )
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_session_data(&self, exchange_id: &str) -> AppResult<ProviderProfile> {
        tracing::debug!("Exchanging session id with identity provider");

        let response = self
            .http_client
            .get(&self.endpoint)
            .header(EXCHANGE_ID_HEADER, exchange_id)
            .send()
            .await
            .map_err(|e| AppError::auth_service(format!("request failed: {}", e)))?;

        // Only a plain 200 carries a profile
        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::auth_service(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        response
            .json::<ProviderProfile>()
            .await
            .map_err(|e| AppError::auth_service(format!("malformed profile: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, routing::get, Json, Router};
    use serde_json::json;

    /// Local stand-in for the provider answering every exchange with `status`
    async fn provider_answering(status: StatusCode) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().route(
            "/session-data",
            get(move |headers: HeaderMap| async move {
                let exchange_id = headers
                    .get(EXCHANGE_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                (
                    status,
                    Json(json!({
                        "id": exchange_id,
                        "email": "jane@example.com",
                        "name": "Jane",
                        "picture": null,
                        "session_token": "provider-token"
                    })),
                )
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/session-data", addr)
    }

    #[tokio::test]
    async fn test_ok_response_yields_profile() {
        let endpoint = provider_answering(StatusCode::OK).await;
        let provider = HttpIdentityProvider::new(endpoint, Duration::from_secs(5));

        let profile = provider.fetch_session_data("exchange-1").await.unwrap();
        assert_eq!(profile.id, "exchange-1");
        assert_eq!(profile.session_token, "provider-token");
    }

    #[tokio::test]
    async fn test_non_200_success_codes_are_rejected() {
        for status in [StatusCode::CREATED, StatusCode::ACCEPTED] {
            let endpoint = provider_answering(status).await;
            let provider = HttpIdentityProvider::new(endpoint, Duration::from_secs(5));

            let result = provider.fetch_session_data("exchange-1").await;
            assert!(
                matches!(result, Err(AppError::AuthService(_))),
                "{} should fail the exchange",
                status
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_auth_service_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = HttpIdentityProvider::new(
            format!("http://{}/session-data", addr),
            Duration::from_secs(2),
        );
        let result = provider.fetch_session_data("exchange-1").await;
        assert!(matches!(result, Err(AppError::AuthService(_))));
    }
}
