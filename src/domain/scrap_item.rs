//! Scrap item entity and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Lifecycle status of a scrap item.
///
/// Submissions start `pending`; an admin moves them to `approved` or
/// `rejected`; recording a sale moves an `approved` item to `sold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrapStatus {
    Pending,
    Approved,
    Rejected,
    Sold,
}

impl ScrapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapStatus::Pending => "pending",
            ScrapStatus::Approved => "approved",
            ScrapStatus::Rejected => "rejected",
            ScrapStatus::Sold => "sold",
        }
    }
}

impl std::fmt::Display for ScrapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScrapStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScrapStatus::Pending),
            "approved" => Ok(ScrapStatus::Approved),
            "rejected" => Ok(ScrapStatus::Rejected),
            "sold" => Ok(ScrapStatus::Sold),
            other => Err(AppError::validation(format!("Unknown scrap status '{}'", other))),
        }
    }
}

/// A scrap item submitted by a user for pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScrapItem {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Metal")]
    pub scrap_type: String,
    /// Weight in kilograms
    #[schema(example = 12.5)]
    pub weight: f64,
    /// Price the owner asks for the item
    #[schema(example = 100.0)]
    pub price_offered: f64,
    pub status: ScrapStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to submit a scrap item.
#[derive(Debug, Clone)]
pub struct NewScrapItem {
    pub scrap_type: String,
    pub weight: f64,
    pub price_offered: f64,
    pub description: Option<String>,
}

impl NewScrapItem {
    /// Check field-level constraints, reporting the first violation.
    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.scrap_type.trim().is_empty() {
            return Err(AppError::validation("scrap_type: must not be empty"));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::validation("weight: must be greater than 0"));
        }
        if !self.price_offered.is_finite() || self.price_offered < 0.0 {
            return Err(AppError::validation("price_offered: must not be negative"));
        }
        Ok(())
    }
}

/// Admin listing row: an item flattened together with its owner's name and email.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScrapItemWithOwner {
    pub id: Uuid,
    pub scrap_type: String,
    pub weight: f64,
    pub price_offered: f64,
    pub status: ScrapStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

impl ScrapItemWithOwner {
    pub fn new(item: ScrapItem, user_name: String, user_email: String) -> Self {
        Self {
            id: item.id,
            scrap_type: item.scrap_type,
            weight: item.weight,
            price_offered: item.price_offered,
            status: item.status,
            description: item.description,
            created_at: item.created_at,
            updated_at: item.updated_at,
            user_name,
            user_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(weight: f64, price: f64) -> NewScrapItem {
        NewScrapItem {
            scrap_type: "Metal".to_string(),
            weight,
            price_offered: price,
            description: None,
        }
    }

    #[test]
    fn test_status_parses_known_values() {
        for status in [
            ScrapStatus::Pending,
            ScrapStatus::Approved,
            ScrapStatus::Rejected,
            ScrapStatus::Sold,
        ] {
            assert_eq!(status.as_str().parse::<ScrapStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_a_validation_error() {
        let err = "shipped".parse::<ScrapStatus>().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_valid_submission() {
        assert!(submission(3.0, 0.0).ensure_valid().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(submission(0.0, 10.0).ensure_valid().is_err());
        assert!(submission(-1.0, 10.0).ensure_valid().is_err());
        assert!(submission(f64::NAN, 10.0).ensure_valid().is_err());
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = submission(1.0, -0.01).ensure_valid().unwrap_err();
        assert!(err.to_string().starts_with("price_offered"));
    }

    #[test]
    fn test_rejects_blank_type() {
        let mut item = submission(1.0, 1.0);
        item.scrap_type = "  ".to_string();
        assert!(item.ensure_valid().is_err());
    }
}
