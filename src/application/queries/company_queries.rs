//! Company Queries

/// 获取公司详情查询
#[derive(Debug, Clone)]
pub struct GetCompany {
    pub code: String,
}

/// 列出所有公司查询
#[derive(Debug, Clone)]
pub struct ListCompanies;
