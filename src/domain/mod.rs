//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Company Context: 公司管理
//! - Invoice Context: 发票管理

pub mod company;
pub mod invoice;

// 共享的请求字段值
mod field;

pub use field::FieldValue;
