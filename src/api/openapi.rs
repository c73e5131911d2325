//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, company_handler, dashboard_handler, sale_handler, scrap_item_handler,
    user_handler,
};
use crate::domain::{
    AdminStats, Company, DashboardStats, Sale, SaleDetails, ScrapItem, ScrapItemWithOwner,
    ScrapStatus, User, UserRole, UserStats,
};
use crate::services::LoginOutcome;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Scrap Market API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scrap Market API",
        version = "0.1.0",
        description = "Scrap recycling marketplace: submissions, approvals, sales and dashboards",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8001", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        auth_handler::profile,
        auth_handler::logout,
        // User endpoints
        user_handler::get_current_user,
        // Scrap items
        scrap_item_handler::create_scrap_item,
        scrap_item_handler::list_my_scrap_items,
        scrap_item_handler::list_all_scrap_items,
        scrap_item_handler::update_scrap_item_status,
        // Companies
        company_handler::create_company,
        company_handler::list_companies,
        // Sales
        sale_handler::create_sale,
        sale_handler::list_sales,
        // Dashboard
        dashboard_handler::dashboard_stats,
        dashboard_handler::scrap_types,
    ),
    components(
        schemas(
            // Domain types
            User,
            UserRole,
            ScrapItem,
            ScrapStatus,
            ScrapItemWithOwner,
            Company,
            Sale,
            SaleDetails,
            AdminStats,
            UserStats,
            DashboardStats,
            // Auth types
            LoginOutcome,
            auth_handler::LoginUrlResponse,
            // Request types
            scrap_item_handler::CreateScrapItemRequest,
            scrap_item_handler::UpdateStatusRequest,
            company_handler::CreateCompanyRequest,
            sale_handler::CreateSaleRequest,
            dashboard_handler::ScrapTypesResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Identity provider login and logout"),
        (name = "Users", description = "Current user"),
        (name = "Scrap Items", description = "Item submission and approval workflow"),
        (name = "Companies", description = "Partner companies (admin)"),
        (name = "Sales", description = "Sales of approved items (admin)"),
        (name = "Dashboard", description = "Statistics and catalog")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier: session cookie, or the same token as a bearer header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session_token"))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token returned by /api/auth/profile"))
                        .build(),
                ),
            );
        }
    }
}
