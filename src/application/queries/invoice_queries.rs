//! Invoice Queries

/// 获取发票详情查询
#[derive(Debug, Clone)]
pub struct GetInvoice {
    pub id: String,
}

/// 列出所有发票查询
#[derive(Debug, Clone)]
pub struct ListInvoices;
