//! Dashboard and catalog handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::SCRAP_TYPES;
use crate::domain::{DashboardStats, User};
use crate::errors::AppResult;

/// Static catalog of scrap categories
#[derive(Debug, Serialize, ToSchema)]
pub struct ScrapTypesResponse {
    #[schema(example = json!(["Metal", "Paper", "Plastic", "Glass", "Electronics"]))]
    pub scrap_types: Vec<String>,
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/stats", get(dashboard_stats))
}

/// Role-aware dashboard figures
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Global stats for admins, own-item stats otherwise", body = DashboardStats),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn dashboard_stats(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.stats(&current_user).await?;
    Ok(Json(stats))
}

/// List the accepted scrap categories
#[utoipa::path(
    get,
    path = "/api/scrap-types",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Scrap categories", body = ScrapTypesResponse)
    )
)]
pub async fn scrap_types() -> Json<ScrapTypesResponse> {
    Json(ScrapTypesResponse {
        scrap_types: SCRAP_TYPES.iter().map(|t| t.to_string()).collect(),
    })
}
