//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, response bodies) belong to the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested item does not exist.
    #[error("Item not found")]
    NotFound,

    /// An item with the same identifier already exists.
    #[error("{0}")]
    Conflict(String),

    /// The request is inconsistent with itself (e.g. path/body id mismatch).
    #[error("{0}")]
    BadRequest(String),

    /// A value failed validation (e.g. malformed identifier).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
