//! Domain error types

use thiserror::Error;

/// Domain-level errors for listing operations
#[derive(Debug, Error)]
pub enum ListingError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Validation error
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Internal error (wraps storage errors etc.)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, ListingError>;
