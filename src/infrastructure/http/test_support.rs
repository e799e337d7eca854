//! Test helpers for driving the full router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use super::server::build_router;
use super::state::AppState;
use crate::application::ports::testing::ScriptedDataStore;
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteDataStore,
};

/// 基于内存 SQLite 的完整应用
pub(crate) async fn sqlite_app() -> Router {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let state = AppState::new(Arc::new(SqliteDataStore::new(pool)));
    build_router(Arc::new(state))
}

/// 基于预置结果 DataStore 的应用
pub(crate) fn scripted_app(store: ScriptedDataStore) -> Router {
    build_router(Arc::new(AppState::new(Arc::new(store))))
}

/// 发送请求并解析 JSON 响应
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    match body {
        Some(json) => send_raw(app, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

/// 以任意 Content-Type 和原始请求体发送请求，响应必须是 JSON（或为空）
pub(crate) async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body.into()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
