//! SQLite Data Store
//!
//! 以 JSON 值绑定参数，按存储类型将结果行解码为 JSON 对象

use async_trait::async_trait;
use serde_json::{Number, Value};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

use super::DbPool;
use crate::application::ports::{DataStorePort, Row, StoreError};

/// SQLite Data Store
///
/// 每次查询从连接池借出一个连接，查询结束（无论成功与否）即归还
pub struct SqliteDataStore {
    pool: DbPool,
}

impl SqliteDataStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// 绑定单个 JSON 参数
///
/// 数组和对象以 JSON 文本绑定
fn bind_value<'q>(query: SqliteQuery<'q>, value: &Value) -> SqliteQuery<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => query.bind(n.as_f64()),
        },
        Value::String(s) => query.bind(s.clone()),
        other => query.bind(other.to_string()),
    }
}

fn decode_row(row: &SqliteRow) -> Result<Row, StoreError> {
    let mut record = Row::new();

    for column in row.columns() {
        let index = column.ordinal();
        let raw = row
            .try_get_raw(index)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            let type_name = raw.type_info().name().to_string();
            match type_name.as_str() {
                "INTEGER" => Value::from(
                    row.try_get_unchecked::<i64, _>(index)
                        .map_err(|e| StoreError::DatabaseError(e.to_string()))?,
                ),
                "REAL" => {
                    let real = row
                        .try_get_unchecked::<f64, _>(index)
                        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
                    Number::from_f64(real).map(Value::Number).unwrap_or(Value::Null)
                }
                "TEXT" => Value::String(
                    row.try_get_unchecked::<String, _>(index)
                        .map_err(|e| StoreError::DatabaseError(e.to_string()))?,
                ),
                other => {
                    return Err(StoreError::UnsupportedType(format!(
                        "{} (column {})",
                        other,
                        column.name()
                    )))
                }
            }
        };

        record.insert(column.name().to_string(), value);
    }

    Ok(record)
}

#[async_trait]
impl DataStorePort for SqliteDataStore {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError> {
        let query = params
            .iter()
            .fold(sqlx::query(sql), |query, param| bind_value(query, param));

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(sql = %sql, params = params.len(), rows = rows.len(), "Query executed");

        rows.iter().map(decode_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use serde_json::json;

    async fn store() -> SqliteDataStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteDataStore::new(pool)
    }

    #[tokio::test]
    async fn test_insert_without_returning_yields_no_rows() {
        let store = store().await;

        let rows = store
            .query(
                "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)",
                &[json!("ibm"), json!("IBM"), json!("Big blue")],
            )
            .await
            .unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_decodes_storage_classes() {
        let store = store().await;

        let rows = store
            .query(
                "SELECT $1 AS i, $2 AS r, $3 AS t, $4 AS n, $5 AS b",
                &[json!(42), json!(1.5), json!("text"), Value::Null, json!(true)],
            )
            .await
            .unwrap();

        assert_eq!(
            Value::Object(rows[0].clone()),
            json!({"i": 42, "r": 1.5, "t": "text", "n": null, "b": 1})
        );
    }

    #[tokio::test]
    async fn test_placeholders_bind_by_number() {
        let store = store().await;

        let rows = store
            .query("SELECT $2 AS second, $1 AS first", &[json!("a"), json!("b")])
            .await
            .unwrap();

        assert_eq!(rows[0].get("second"), Some(&json!("b")));
        assert_eq!(rows[0].get("first"), Some(&json!("a")));
    }

    #[tokio::test]
    async fn test_foreign_key_violation_is_store_error() {
        let store = store().await;

        let err = store
            .query(
                "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING *",
                &[json!("nope"), json!(100)],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_text_id_matches_integer_key() {
        let store = store().await;
        store
            .query(
                "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)",
                &[json!("ibm"), json!("IBM"), json!("Big blue")],
            )
            .await
            .unwrap();
        let created = store
            .query(
                "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING *",
                &[json!("ibm"), json!(250)],
            )
            .await
            .unwrap();
        let id = created[0].get("id").and_then(Value::as_i64).unwrap();

        let rows = store
            .query(
                "SELECT * FROM invoices WHERE id = $1",
                &[Value::String(id.to_string())],
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("amt"), Some(&json!(250.0)));
    }
}
