//! Scrap item database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{ScrapItem, ScrapStatus};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scrap_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub scrap_type: String,
    pub weight: f64,
    pub price_offered: f64,
    /// Lowercase [`ScrapStatus`] value
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ScrapItem {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model.status.parse::<ScrapStatus>().map_err(|_| {
            AppError::internal(format!(
                "scrap item {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(ScrapItem {
            id: model.id,
            user_id: model.user_id,
            scrap_type: model.scrap_type,
            weight: model.weight,
            price_offered: model.price_offered,
            status,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
