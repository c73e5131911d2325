//! Company database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Company;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub email: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Company {
    fn from(model: Model) -> Self {
        Company {
            id: model.id,
            name: model.name,
            contact: model.contact,
            address: model.address,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
