//! Company Context - 公司限界上下文
//!
//! 职责:
//! - 公司创建输入校验
//! - 公司更新输入（不做校验，原样透传）

mod entities;
mod errors;

pub use entities::{CompanyPatch, NewCompany};
pub use errors::CompanyError;

/// 资源名称（用于 NotFound 消息）
pub const RESOURCE: &str = "Company";
