//! Ping Handler
//!
//! `GET /ping`：返回服务状态和构建版本，不访问数据库

use axum::Json;
use serde::Serialize;

/// `/ping` 响应体
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// bizdb 存活检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
