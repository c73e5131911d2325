//! Scrap item handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewScrapItem, ScrapItem, ScrapItemWithOwner, ScrapStatus, User};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Scrap item submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateScrapItemRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Metal")]
    pub scrap_type: String,
    /// Weight in kilograms, greater than zero
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    #[schema(example = 12.5)]
    pub weight: f64,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[schema(example = 100.0)]
    pub price_offered: f64,
    #[schema(example = "Copper pipes from a renovation")]
    pub description: Option<String>,
}

impl From<CreateScrapItemRequest> for NewScrapItem {
    fn from(req: CreateScrapItemRequest) -> Self {
        NewScrapItem {
            scrap_type: req.scrap_type,
            weight: req.weight,
            price_offered: req.price_offered,
            description: req.description,
        }
    }
}

/// Status change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: ScrapStatus,
}

/// Routes available to every authenticated user
pub fn scrap_item_routes() -> Router<AppState> {
    Router::new().route("/", get(list_my_scrap_items).post(create_scrap_item))
}

/// Routes restricted to administrators
pub fn scrap_item_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_all_scrap_items))
        .route("/:id/status", put(update_scrap_item_status))
}

/// Submit a scrap item for pickup
#[utoipa::path(
    post,
    path = "/api/scrap-items",
    tag = "Scrap Items",
    security(("session_token" = [])),
    request_body = CreateScrapItemRequest,
    responses(
        (status = 200, description = "Item created with status pending", body = ScrapItem),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_scrap_item(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateScrapItemRequest>,
) -> AppResult<Json<ScrapItem>> {
    let item = state
        .scrap_item_service
        .submit(&current_user, payload.into())
        .await?;
    Ok(Json(item))
}

/// List the caller's own items
#[utoipa::path(
    get,
    path = "/api/scrap-items",
    tag = "Scrap Items",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Items owned by the caller", body = Vec<ScrapItem>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_my_scrap_items(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScrapItem>>> {
    let items = state.scrap_item_service.list_mine(&current_user).await?;
    Ok(Json(items))
}

/// List every item with its owner (admin only)
#[utoipa::path(
    get,
    path = "/api/scrap-items/all",
    tag = "Scrap Items",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "All items with owner name and email", body = Vec<ScrapItemWithOwner>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_all_scrap_items(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScrapItemWithOwner>>> {
    let items = state
        .scrap_item_service
        .list_all_with_owner(&current_user)
        .await?;
    Ok(Json(items))
}

/// Set an item's status (admin only)
#[utoipa::path(
    put,
    path = "/api/scrap-items/{id}/status",
    tag = "Scrap Items",
    security(("session_token" = [])),
    params(
        ("id" = Uuid, Path, description = "Scrap item ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Scrap item not found"),
        (status = 422, description = "Unknown status")
    )
)]
pub async fn update_scrap_item_status(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .scrap_item_service
        .set_status(&current_user, id, payload.status)
        .await?;
    Ok(Json(MessageResponse::new("Status updated successfully")))
}
