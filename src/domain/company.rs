//! Partner company entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A company that buys approved scrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: Uuid,
    #[schema(example = "Green Metals Ltd")]
    pub name: String,
    #[schema(example = "+1 555 0100")]
    pub contact: String,
    #[schema(example = "12 Foundry Road")]
    pub address: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to register a company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub email: Option<String>,
}
