//! Sale handlers (admin only).

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewSale, Sale, SaleDetails, User};
use crate::errors::AppResult;

/// Sale request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    pub scrap_item_id: Uuid,
    pub company_id: Uuid,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[schema(example = 150.0)]
    pub selling_price: f64,
}

impl From<CreateSaleRequest> for NewSale {
    fn from(req: CreateSaleRequest) -> Self {
        NewSale {
            scrap_item_id: req.scrap_item_id,
            company_id: req.company_id,
            selling_price: req.selling_price,
        }
    }
}

pub fn sale_routes() -> Router<AppState> {
    Router::new().route("/", get(list_sales).post(create_sale))
}

/// Sell an approved item to a company
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    security(("session_token" = [])),
    request_body = CreateSaleRequest,
    responses(
        (status = 200, description = "Sale recorded, item marked sold", body = Sale),
        (status = 400, description = "Item is not approved"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Scrap item or company not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_sale(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSaleRequest>,
) -> AppResult<Json<Sale>> {
    let sale = state.sale_service.sell(&current_user, payload.into()).await?;
    Ok(Json(sale))
}

/// List all sales with item and company
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "All sales", body = Vec<SaleDetails>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_sales(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SaleDetails>>> {
    let sales = state.sale_service.list_all(&current_user).await?;
    Ok(Json(sales))
}
