//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid city name
    #[error("Invalid city name: {0}")]
    InvalidCityName(String),

    /// Unix timestamp outside the representable range
    #[error("Invalid timestamp: {0} is not a representable Unix time")]
    InvalidTimestamp(i64),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
