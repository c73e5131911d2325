//! Authentication handlers.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::middleware::session_token;
use crate::api::AppState;
use crate::config::{EXCHANGE_ID_HEADER, SESSION_COOKIE_NAME};
use crate::errors::AppResult;
use crate::services::LoginOutcome;
use crate::types::MessageResponse;

/// Where to send the browser to log in
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUrlResponse {
    #[schema(example = "https://auth.emergentagent.com/?redirect=http://localhost:3000")]
    pub auth_url: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
}

/// Get the hosted login URL
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = "Authentication",
    responses(
        (status = 200, description = "Login portal URL", body = LoginUrlResponse)
    )
)]
pub async fn login(State(state): State<AppState>) -> Json<LoginUrlResponse> {
    Json(LoginUrlResponse {
        auth_url: state.auth_service.login_url(),
    })
}

/// Exchange the provider's session id for a profile and a session
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "Authentication",
    params(
        ("X-Session-ID" = String, Header, description = "Exchange id issued by the identity provider")
    ),
    responses(
        (status = 200, description = "Logged in; session cookie set", body = LoginOutcome),
        (status = 400, description = "Exchange id missing"),
        (status = 502, description = "Identity provider failure")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<(CookieJar, Json<LoginOutcome>)> {
    let exchange_id = headers
        .get(EXCHANGE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let outcome = state
        .auth_service
        .exchange_profile(exchange_id, Utc::now())
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, outcome.session_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .build();

    Ok((jar.add(cookie), Json(outcome)))
}

/// Revoke the current session and clear the cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let token = session_token(&headers);
    state.auth_service.logout(token.as_deref()).await?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    Ok((jar, Json(MessageResponse::new("Logged out successfully"))))
}
