//! Invoice Context - 发票限界上下文
//!
//! 职责:
//! - 发票创建输入校验
//! - id 由存储层生成；comp_code 的引用完整性由存储层外键保证

mod entities;
mod errors;

pub use entities::NewInvoice;
pub use errors::InvoiceError;

/// 资源名称（用于 NotFound 消息）
pub const RESOURCE: &str = "Invoice";
