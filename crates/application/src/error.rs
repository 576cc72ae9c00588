//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::DeliveryError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid query, invalid address)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The research pipeline failed or misbehaved
    #[error("Research pipeline error: {0}")]
    Pipeline(String),

    /// Email delivery failed
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::EmptyQuery.into();
        assert_eq!(err.to_string(), "Research query must not be empty");
    }

    #[test]
    fn pipeline_error_message() {
        let err = ApplicationError::Pipeline("upstream closed".to_string());
        assert_eq!(err.to_string(), "Research pipeline error: upstream closed");
    }

    #[test]
    fn delivery_error_is_transparent() {
        let err: ApplicationError = DeliveryError::MissingCredentials.into();
        assert_eq!(err.to_string(), "Email credentials are not configured");
    }

    #[test]
    fn configuration_error_message() {
        let err = ApplicationError::Configuration("missing sender".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing sender");
    }
}
