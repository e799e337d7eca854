//! Company Context - Entities

use serde_json::{Map, Value};

use super::CompanyError;
use crate::domain::FieldValue;

/// 待创建的公司
///
/// 不变量:
/// - code、name、description 均为真值
/// - code 由客户端指定，创建后不可修改
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    code: FieldValue,
    name: FieldValue,
    description: FieldValue,
}

impl NewCompany {
    pub fn new(
        code: FieldValue,
        name: FieldValue,
        description: FieldValue,
    ) -> Result<Self, CompanyError> {
        if !code.is_present() || !name.is_present() || !description.is_present() {
            return Err(CompanyError::MissingFields);
        }
        Ok(Self {
            code,
            name,
            description,
        })
    }

    /// 按 (code, name, description) 顺序生成 SQL 参数
    pub fn params(&self) -> [Value; 3] {
        [
            self.code.as_value().clone(),
            self.name.as_value().clone(),
            self.description.as_value().clone(),
        ]
    }

    pub fn code(&self) -> &FieldValue {
        &self.code
    }

    /// 以提交的字段构造响应记录
    pub fn into_record(self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("code".to_string(), self.code.into_value());
        record.insert("name".to_string(), self.name.into_value());
        record.insert("description".to_string(), self.description.into_value());
        record
    }
}

/// 公司更新内容
///
/// name/description 不做存在性校验，缺省值以 `null` 写入
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompanyPatch {
    pub name: FieldValue,
    pub description: FieldValue,
}

impl CompanyPatch {
    pub fn new(name: FieldValue, description: FieldValue) -> Self {
        Self { name, description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_company_requires_all_fields() {
        let err = NewCompany::new("ibm".into(), "IBM".into(), FieldValue::missing()).unwrap_err();
        assert_eq!(err, CompanyError::MissingFields);
        assert_eq!(err.to_string(), "Code, name, and description are required");

        assert!(NewCompany::new("".into(), "IBM".into(), "Big blue".into()).is_err());
    }

    #[test]
    fn test_new_company_record_echoes_input() {
        let company = NewCompany::new("ibm".into(), "IBM".into(), "Big blue".into()).unwrap();
        assert_eq!(company.params(), [json!("ibm"), json!("IBM"), json!("Big blue")]);

        let record = company.into_record();
        assert_eq!(
            Value::Object(record),
            json!({"code": "ibm", "name": "IBM", "description": "Big blue"})
        );
    }
}
