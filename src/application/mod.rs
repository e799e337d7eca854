//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DataStore）
//! - commands: CQRS 命令
//! - queries: CQRS 查询
//! - resources: 公司、发票资源用例
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod resources;

// Re-exports
pub use commands::{
    // Company commands
    CreateCompany,
    DeleteCompany,
    UpdateCompany,
    // Invoice commands
    CreateInvoice,
    DeleteInvoice,
    UpdateInvoice,
};

pub use error::ApplicationError;

pub use ports::{DataStorePort, Row, StoreError};

pub use queries::{GetCompany, GetInvoice, ListCompanies, ListInvoices};

pub use resources::{CompanyResource, InvoiceResource};
