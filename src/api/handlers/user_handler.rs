//! User handlers.

use axum::{extract::Extension, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::User;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_user))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Current user profile", body = User),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(Extension(current_user): Extension<User>) -> Json<User> {
    Json(current_user)
}
