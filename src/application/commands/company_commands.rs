//! Company Commands

use crate::domain::FieldValue;

/// 创建公司命令
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub code: FieldValue,
    pub name: FieldValue,
    pub description: FieldValue,
}

/// 更新公司命令
#[derive(Debug, Clone)]
pub struct UpdateCompany {
    pub code: String,
    pub name: FieldValue,
    pub description: FieldValue,
}

/// 删除公司命令
#[derive(Debug, Clone)]
pub struct DeleteCompany {
    pub code: String,
}
