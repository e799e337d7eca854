//! Invoice Resource

use std::sync::Arc;

use serde_json::Value;

use super::first_row;
use crate::application::commands::{CreateInvoice, DeleteInvoice, UpdateInvoice};
use crate::application::error::ApplicationError;
use crate::application::ports::{DataStorePort, Row, StoreError};
use crate::application::queries::{GetInvoice, ListInvoices};
use crate::domain::invoice::{self, NewInvoice};

const LIST_SQL: &str = "SELECT id, comp_code FROM invoices";
const GET_SQL: &str = "SELECT * FROM invoices WHERE id = $1";
const INSERT_SQL: &str = "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING *";
const UPDATE_SQL: &str = "UPDATE invoices SET amt = $1 WHERE id = $2 RETURNING *";
const DELETE_SQL: &str = "DELETE FROM invoices WHERE id = $1 RETURNING *";

/// 发票资源
///
/// id 以路径中的原始字符串绑定，类型转换交给存储层
pub struct InvoiceResource {
    store: Arc<dyn DataStorePort>,
}

impl InvoiceResource {
    pub fn new(store: Arc<dyn DataStorePort>) -> Self {
        Self { store }
    }

    /// 列出所有发票的 (id, comp_code)
    pub async fn list(&self, _query: ListInvoices) -> Result<Vec<Row>, ApplicationError> {
        self.store
            .query(LIST_SQL, &[])
            .await
            .map_err(|e| ApplicationError::store("fetching invoices", e))
    }

    pub async fn get(&self, query: GetInvoice) -> Result<Row, ApplicationError> {
        let rows = self
            .store
            .query(GET_SQL, &[Value::String(query.id)])
            .await
            .map_err(|e| ApplicationError::store("fetching invoice", e))?;

        first_row(rows, invoice::RESOURCE)
    }

    /// 创建发票，返回存储层生成的完整行（含 id）
    pub async fn create(&self, command: CreateInvoice) -> Result<Row, ApplicationError> {
        let new_invoice = NewInvoice::new(command.comp_code, command.amt)?;

        let rows = self
            .store
            .query(INSERT_SQL, &new_invoice.params())
            .await
            .map_err(|e| ApplicationError::store("adding invoice", e))?;

        // INSERT ... RETURNING 没有返回行说明存储层异常，不是 NotFound
        let record = rows.into_iter().next().ok_or_else(|| {
            ApplicationError::store(
                "adding invoice",
                StoreError::DatabaseError("INSERT returned no row".to_string()),
            )
        })?;

        tracing::info!(
            invoice_id = ?record.get("id"),
            comp_code = %new_invoice.comp_code().as_value(),
            "Invoice created"
        );

        Ok(record)
    }

    pub async fn update(&self, command: UpdateInvoice) -> Result<Row, ApplicationError> {
        let rows = self
            .store
            .query(
                UPDATE_SQL,
                &[command.amt.into_value(), Value::String(command.id)],
            )
            .await
            .map_err(|e| ApplicationError::store("updating invoice", e))?;

        first_row(rows, invoice::RESOURCE)
    }

    pub async fn delete(&self, command: DeleteInvoice) -> Result<(), ApplicationError> {
        let rows = self
            .store
            .query(DELETE_SQL, &[Value::String(command.id.clone())])
            .await
            .map_err(|e| ApplicationError::store("deleting invoice", e))?;

        first_row(rows, invoice::RESOURCE)?;

        tracing::info!(invoice_id = %command.id, "Invoice deleted");

        Ok(())
    }
}
