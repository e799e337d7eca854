//! Invoice Commands

use crate::domain::FieldValue;

/// 创建发票命令
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub comp_code: FieldValue,
    pub amt: FieldValue,
}

/// 更新发票金额命令
///
/// id 保持路径中收到的原始字符串
#[derive(Debug, Clone)]
pub struct UpdateInvoice {
    pub id: String,
    pub amt: FieldValue,
}

/// 删除发票命令
#[derive(Debug, Clone)]
pub struct DeleteInvoice {
    pub id: String,
}
