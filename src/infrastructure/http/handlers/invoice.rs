//! Invoice HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateInvoice, DeleteInvoice, GetInvoice, ListInvoices, UpdateInvoice};
use crate::infrastructure::http::dto::{
    CreateInvoiceRequest, InvoiceEnvelope, InvoicesEnvelope, StatusEnvelope,
    UpdateInvoiceRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonBody;
use crate::infrastructure::http::state::AppState;

/// 获取发票列表
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesEnvelope>, ApiError> {
    let invoices = state.invoices.list(ListInvoices).await?;
    Ok(Json(InvoicesEnvelope { invoices }))
}

/// 获取发票详情
///
/// id 不做数字校验，原样交给存储层
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceEnvelope>, ApiError> {
    let invoice = state.invoices.get(GetInvoice { id }).await?;
    Ok(Json(InvoiceEnvelope { invoice }))
}

/// 创建发票
pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceEnvelope>), ApiError> {
    let command = CreateInvoice {
        comp_code: req.comp_code,
        amt: req.amt,
    };

    let invoice = state.invoices.create(command).await?;

    Ok((StatusCode::CREATED, Json(InvoiceEnvelope { invoice })))
}

/// 更新发票金额
pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceEnvelope>, ApiError> {
    let invoice = state
        .invoices
        .update(UpdateInvoice { id, amt: req.amt })
        .await?;

    Ok(Json(InvoiceEnvelope { invoice }))
}

/// 删除发票
pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StatusEnvelope>, ApiError> {
    state.invoices.delete(DeleteInvoice { id }).await?;
    Ok(Json(StatusEnvelope::deleted()))
}
