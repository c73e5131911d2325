//! Company handlers (admin only).

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Company, NewCompany, User};
use crate::errors::AppResult;

/// Company registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Green Metals Ltd")]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "+1 555 0100")]
    pub contact: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "12 Foundry Road")]
    pub address: String,
    #[validate(email(message = "must be a valid email address"))]
    #[schema(example = "buying@greenmetals.example")]
    pub email: Option<String>,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(req: CreateCompanyRequest) -> Self {
        NewCompany {
            name: req.name,
            contact: req.contact,
            address: req.address,
            email: req.email,
        }
    }
}

pub fn company_routes() -> Router<AppState> {
    Router::new().route("/", get(list_companies).post(create_company))
}

/// Register a partner company
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    security(("session_token" = [])),
    request_body = CreateCompanyRequest,
    responses(
        (status = 200, description = "Company created", body = Company),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_company(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompanyRequest>,
) -> AppResult<Json<Company>> {
    let company = state
        .company_service
        .create(&current_user, payload.into())
        .await?;
    Ok(Json(company))
}

/// List partner companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "All companies", body = Vec<Company>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_companies(
    Extension(current_user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = state.company_service.list(&current_user).await?;
    Ok(Json(companies))
}
