//! Invoice Context - Entities

use serde_json::Value;

use super::InvoiceError;
use crate::domain::FieldValue;

/// 待创建的发票
///
/// 不变量:
/// - comp_code、amt 均为真值
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    comp_code: FieldValue,
    amt: FieldValue,
}

impl NewInvoice {
    pub fn new(comp_code: FieldValue, amt: FieldValue) -> Result<Self, InvoiceError> {
        if !comp_code.is_present() || !amt.is_present() {
            return Err(InvoiceError::MissingFields);
        }
        Ok(Self { comp_code, amt })
    }

    /// 按 (comp_code, amt) 顺序生成 SQL 参数
    pub fn params(&self) -> [Value; 2] {
        [self.comp_code.as_value().clone(), self.amt.as_value().clone()]
    }

    pub fn comp_code(&self) -> &FieldValue {
        &self.comp_code
    }
}
