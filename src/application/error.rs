//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::company::CompanyError;
use crate::domain::invoice::InvoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 必填字段缺失（在访问存储前检测）
    #[error("{0}")]
    InvalidInput(String),

    /// 资源未找到
    #[error("{resource_type} not found")]
    NotFound { resource_type: &'static str },

    /// 存储层错误
    #[error("Error {action}: {source}")]
    StoreFailure {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound { resource_type }
    }

    /// 创建输入无效错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 包装存储层错误，附带正在执行的操作
    pub fn store(action: &'static str, source: StoreError) -> Self {
        Self::StoreFailure { action, source }
    }
}

impl From<CompanyError> for ApplicationError {
    fn from(err: CompanyError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<InvoiceError> for ApplicationError {
    fn from(err: InvoiceError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApplicationError::not_found("Company").to_string(),
            "Company not found"
        );
        assert_eq!(
            ApplicationError::from(InvoiceError::MissingFields).to_string(),
            "Company code and amount are required"
        );

        let err = ApplicationError::store(
            "fetching invoices",
            StoreError::DatabaseError("no such table: invoices".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Error fetching invoices: Database error: no such table: invoices"
        );
    }
}
