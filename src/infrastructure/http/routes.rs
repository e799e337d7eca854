//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                  GET     健康检查
//! - /companies             GET     列出所有公司 (code, name)
//! - /companies             POST    创建公司
//! - /companies/{code}      GET     获取公司详情
//! - /companies/{code}      PUT     更新公司名称和描述
//! - /companies/{code}      DELETE  删除公司
//! - /invoices              GET     列出所有发票 (id, comp_code)
//! - /invoices              POST    创建发票
//! - /invoices/{id}         GET     获取发票详情
//! - /invoices/{id}         PUT     更新发票金额
//! - /invoices/{id}         DELETE  删除发票

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/companies", company_routes())
        .nest("/invoices", invoice_routes())
}

/// Company 路由
fn company_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_companies).post(handlers::create_company),
        )
        .route(
            "/:code",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company),
        )
}

/// Invoice 路由
fn invoice_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_invoices).post(handlers::create_invoice),
        )
        .route(
            "/:id",
            get(handlers::get_invoice)
                .put(handlers::update_invoice)
                .delete(handlers::delete_invoice),
        )
}
