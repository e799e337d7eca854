//! Field Value - 请求体字段值
//!
//! 请求体中的字段原样透传给存储层，领域层只负责判断字段是否"存在"

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 请求体字段值
///
/// 缺省字段反序列化为 `null`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// 缺省字段
    pub fn missing() -> Self {
        Self(Value::Null)
    }

    /// 字段是否存在且为真值
    ///
    /// `null`、`false`、`0`、`NaN`、空字符串视为不存在；数组和对象总是存在
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}
