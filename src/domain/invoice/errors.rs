//! Invoice Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("Company code and amount are required")]
    MissingFields,
}
