//! Company HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateCompany, DeleteCompany, GetCompany, ListCompanies, UpdateCompany};
use crate::infrastructure::http::dto::{
    CompaniesEnvelope, CompanyEnvelope, CreateCompanyRequest, StatusEnvelope,
    UpdateCompanyRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonBody;
use crate::infrastructure::http::state::AppState;

/// 获取公司列表
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompaniesEnvelope>, ApiError> {
    let companies = state.companies.list(ListCompanies).await?;
    Ok(Json(CompaniesEnvelope { companies }))
}

/// 获取公司详情
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyEnvelope>, ApiError> {
    let company = state.companies.get(GetCompany { code }).await?;
    Ok(Json(CompanyEnvelope { company }))
}

/// 创建公司
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyEnvelope>), ApiError> {
    let command = CreateCompany {
        code: req.code,
        name: req.name,
        description: req.description,
    };

    let company = state.companies.create(command).await?;

    Ok((StatusCode::CREATED, Json(CompanyEnvelope { company })))
}

/// 更新公司名称和描述
pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    JsonBody(req): JsonBody<UpdateCompanyRequest>,
) -> Result<Json<CompanyEnvelope>, ApiError> {
    let command = UpdateCompany {
        code,
        name: req.name,
        description: req.description,
    };

    let company = state.companies.update(command).await?;

    Ok(Json(CompanyEnvelope { company }))
}

/// 删除公司
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<StatusEnvelope>, ApiError> {
    state.companies.delete(DeleteCompany { code }).await?;
    Ok(Json(StatusEnvelope::deleted()))
}
