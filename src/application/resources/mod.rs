//! Resources - 资源用例
//!
//! 每个资源持有注入的 DataStore，每个操作只发出一条 SQL

mod company_resource;
mod invoice_resource;

pub use company_resource::CompanyResource;
pub use invoice_resource::InvoiceResource;

use crate::application::error::ApplicationError;
use crate::application::ports::Row;

/// 取第一行，无结果时返回 NotFound
fn first_row(rows: Vec<Row>, resource_type: &'static str) -> Result<Row, ApplicationError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| ApplicationError::not_found(resource_type))
}
