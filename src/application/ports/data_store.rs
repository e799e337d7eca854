//! Data Store Port - 出站端口
//!
//! 参数化 SQL 执行的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// 查询结果行（列名 -> 值）
pub type Row = Map<String, Value>;

/// DataStore 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),
}

/// DataStore Port
///
/// 连接的获取与归还由实现负责，任何退出路径都必须归还连接
#[async_trait]
pub trait DataStorePort: Send + Sync {
    /// 执行一条 SQL 语句
    ///
    /// `sql` 使用 `$1`、`$2` ... 位置占位符，`params` 按位置绑定。
    /// 不返回行的语句（如无 RETURNING 的 INSERT）返回空列表
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError>;
}
