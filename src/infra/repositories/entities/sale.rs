//! Sale database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Sale;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub scrap_item_id: Uuid,
    pub company_id: Uuid,
    pub selling_price: f64,
    pub profit: f64,
    pub sold_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scrap_item::Entity",
        from = "Column::ScrapItemId",
        to = "super::scrap_item::Column::Id"
    )]
    ScrapItem,
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::scrap_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScrapItem.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(model: Model) -> Self {
        Sale {
            id: model.id,
            scrap_item_id: model.scrap_item_id,
            company_id: model.company_id,
            selling_price: model.selling_price,
            profit: model.profit,
            sold_at: model.sold_at,
        }
    }
}
