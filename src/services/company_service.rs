//! Partner company management (admin only).

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Company, NewCompany, User};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CompanyService: Send + Sync {
    async fn create(&self, actor: &User, company: NewCompany) -> AppResult<Company>;

    async fn list(&self, actor: &User) -> AppResult<Vec<Company>>;
}

pub struct CompanyManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CompanyManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CompanyService for CompanyManager<U> {
    async fn create(&self, actor: &User, company: NewCompany) -> AppResult<Company> {
        actor.ensure_admin()?;
        let company = self.uow.companies().create(company).await?;
        tracing::info!(company_id = %company.id, "Company registered");
        Ok(company)
    }

    async fn list(&self, actor: &User) -> AppResult<Vec<Company>> {
        actor.ensure_admin()?;
        self.uow.companies().list().await
    }
}
