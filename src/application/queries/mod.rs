//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod company_queries;
mod invoice_queries;

pub use company_queries::*;
pub use invoice_queries::*;
