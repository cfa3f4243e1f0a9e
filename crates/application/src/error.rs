//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream service could not be reached
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Upstream responded but with an unexpected shape
    #[error("Malformed upstream response: {0}")]
    UpstreamMalformed(String),

    /// The requested resource (typically a city) was not found upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::ExternalService(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_is_retryable() {
        assert!(ApplicationError::ExternalService("down".into()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
    }

    #[test]
    fn not_found_is_not_retryable() {
        assert!(!ApplicationError::NotFound("city".into()).is_retryable());
        assert!(!ApplicationError::UpstreamMalformed("no list".into()).is_retryable());
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidCityName("   ".into()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn messages_are_descriptive() {
        let err = ApplicationError::UpstreamMalformed("missing 'list'".into());
        assert_eq!(err.to_string(), "Malformed upstream response: missing 'list'");
    }
}
