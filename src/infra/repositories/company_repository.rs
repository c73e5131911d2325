//! Company repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::company::{self, ActiveModel, Entity as CompanyEntity};
use crate::domain::{Company, NewCompany};
use crate::errors::AppResult;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: NewCompany) -> AppResult<Company>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>>;

    /// All companies, oldest first
    async fn list(&self) -> AppResult<Vec<Company>>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct CompanyStore {
    db: DatabaseConnection,
}

impl CompanyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for CompanyStore {
    async fn create(&self, company: NewCompany) -> AppResult<Company> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(company.name),
            contact: Set(company.contact),
            address: Set(company.address),
            email: Set(company.email),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Company::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        let result = CompanyEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Company::from))
    }

    async fn list(&self) -> AppResult<Vec<Company>> {
        let models = CompanyEntity::find()
            .order_by_asc(company::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(CompanyEntity::find().count(&self.db).await?)
    }
}
