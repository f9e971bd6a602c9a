//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The three kinds map one-to-one onto the HTTP failures of the API layer:
/// bad request, not found and processing error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No record exists for a well-formed identifier.
    #[error("not found")]
    NotFound,

    /// Unexpected failure while handling a request (carries the underlying message).
    #[error("{0}")]
    Processing(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_error_displays_underlying_message() {
        let err = DomainError::processing("lock poisoned");
        assert_eq!(err.to_string(), "lock poisoned");
    }

    #[test]
    fn invalid_id_is_prefixed() {
        let err = DomainError::invalid_id("ProductId: abc");
        assert_eq!(err.to_string(), "invalid identifier: ProductId: abc");
    }
}
