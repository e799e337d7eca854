//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::Row;
use crate::domain::FieldValue;

// ============================================================================
// 响应信封
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CompaniesEnvelope {
    pub companies: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct CompanyEnvelope {
    pub company: Row,
}

#[derive(Debug, Serialize)]
pub struct InvoicesEnvelope {
    pub invoices: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceEnvelope {
    pub invoice: Row,
}

/// 删除成功响应
#[derive(Debug, Serialize)]
pub struct StatusEnvelope {
    pub status: &'static str,
}

impl StatusEnvelope {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

// ============================================================================
// Company DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub code: FieldValue,
    #[serde(default)]
    pub name: FieldValue,
    #[serde(default)]
    pub description: FieldValue,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: FieldValue,
    #[serde(default)]
    pub description: FieldValue,
}

// ============================================================================
// Invoice DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    pub comp_code: FieldValue,
    #[serde(default)]
    pub amt: FieldValue,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub amt: FieldValue,
}
