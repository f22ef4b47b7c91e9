//! API validation errors

use thiserror::Error;

use crate::service::filter::BudgetRangeParseError;

/// Errors that can occur while validating listing search query parameters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryValidationError {
    #[error("budget: {0}")]
    InvalidBudget(#[from] BudgetRangeParseError),

    #[error("propertyType must be one of flat, villa, plot, or all; got {0:?}")]
    InvalidPropertyType(String),

    #[error("bhk must be an integer or the sentinel \"all\"; got {0:?}")]
    InvalidBhk(String),
}

/// Errors that can occur while normalizing a listing creation payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreateListingValidationError {
    #[error("field {field} must be a number; got {value:?}")]
    NonNumericField { field: &'static str, value: String },

    #[error("field {field} must be a whole number; got {value}")]
    NonIntegerField { field: &'static str, value: f64 },

    #[error("field {field} is out of range")]
    OutOfRangeField { field: &'static str },
}
