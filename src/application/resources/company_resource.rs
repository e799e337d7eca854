//! Company Resource

use std::sync::Arc;

use serde_json::Value;

use super::first_row;
use crate::application::commands::{CreateCompany, DeleteCompany, UpdateCompany};
use crate::application::error::ApplicationError;
use crate::application::ports::{DataStorePort, Row};
use crate::application::queries::{GetCompany, ListCompanies};
use crate::domain::company::{self, CompanyPatch, NewCompany};

const LIST_SQL: &str = "SELECT code, name FROM companies";
const GET_SQL: &str = "SELECT * FROM companies WHERE code = $1";
const INSERT_SQL: &str = "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)";
const UPDATE_SQL: &str =
    "UPDATE companies SET name = $1, description = $2 WHERE code = $3 RETURNING *";
const DELETE_SQL: &str = "DELETE FROM companies WHERE code = $1 RETURNING *";

/// 公司资源
pub struct CompanyResource {
    store: Arc<dyn DataStorePort>,
}

impl CompanyResource {
    pub fn new(store: Arc<dyn DataStorePort>) -> Self {
        Self { store }
    }

    /// 列出所有公司的 (code, name)
    pub async fn list(&self, _query: ListCompanies) -> Result<Vec<Row>, ApplicationError> {
        self.store
            .query(LIST_SQL, &[])
            .await
            .map_err(|e| ApplicationError::store("fetching companies", e))
    }

    pub async fn get(&self, query: GetCompany) -> Result<Row, ApplicationError> {
        let rows = self
            .store
            .query(GET_SQL, &[Value::String(query.code)])
            .await
            .map_err(|e| ApplicationError::store("fetching company", e))?;

        first_row(rows, company::RESOURCE)
    }

    /// 创建公司
    ///
    /// 返回提交的字段，不回读存储
    pub async fn create(&self, command: CreateCompany) -> Result<Row, ApplicationError> {
        let company = NewCompany::new(command.code, command.name, command.description)?;

        self.store
            .query(INSERT_SQL, &company.params())
            .await
            .map_err(|e| ApplicationError::store("creating company", e))?;

        tracing::info!(company_code = %company.code().as_value(), "Company created");

        Ok(company.into_record())
    }

    pub async fn update(&self, command: UpdateCompany) -> Result<Row, ApplicationError> {
        let patch = CompanyPatch::new(command.name, command.description);
        let params = [
            patch.name.into_value(),
            patch.description.into_value(),
            Value::String(command.code),
        ];

        let rows = self
            .store
            .query(UPDATE_SQL, &params)
            .await
            .map_err(|e| ApplicationError::store("updating company", e))?;

        first_row(rows, company::RESOURCE)
    }

    pub async fn delete(&self, command: DeleteCompany) -> Result<(), ApplicationError> {
        let rows = self
            .store
            .query(DELETE_SQL, &[Value::String(command.code.clone())])
            .await
            .map_err(|e| ApplicationError::store("deleting company", e))?;

        first_row(rows, company::RESOURCE)?;

        tracing::info!(company_code = %command.code, "Company deleted");

        Ok(())
    }
}
