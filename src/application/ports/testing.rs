//! Scripted Data Store - 测试用 DataStore
//!
//! 记录每次调用的 SQL 与参数，按顺序返回预置结果

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{DataStorePort, Row, StoreError};

/// 已记录的调用
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

pub struct ScriptedDataStore {
    responses: Mutex<VecDeque<Result<Vec<Row>, StoreError>>>,
    calls: Mutex<Vec<RecordedQuery>>,
}

impl ScriptedDataStore {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 预置一次返回的行
    pub fn returning(self, rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| match row {
                Value::Object(map) => map,
                other => panic!("scripted row must be an object, got {other}"),
            })
            .collect();
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// 预置一次失败
    pub fn failing(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(StoreError::DatabaseError(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataStorePort for ScriptedDataStore {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError> {
        self.calls.lock().unwrap().push(RecordedQuery {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
