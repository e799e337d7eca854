//! Company Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompanyError {
    #[error("Code, name, and description are required")]
    MissingFields,
}
