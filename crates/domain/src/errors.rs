//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Research query is empty or whitespace-only
    #[error("Research query must not be empty")]
    EmptyQuery,

    /// Research query exceeds the maximum length
    #[error("Research query too long: {len} characters (maximum {max})")]
    QueryTooLong { len: usize, max: usize },

    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Report body is empty
    #[error("Report must not be empty")]
    EmptyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_error_message() {
        let err = DomainError::EmptyQuery;
        assert_eq!(err.to_string(), "Research query must not be empty");
    }

    #[test]
    fn query_too_long_error_message() {
        let err = DomainError::QueryTooLong {
            len: 5000,
            max: 4096,
        };
        assert_eq!(
            err.to_string(),
            "Research query too long: 5000 characters (maximum 4096)"
        );
    }

    #[test]
    fn invalid_email_error_message() {
        let err = DomainError::InvalidEmailAddress("bad-address".to_string());
        assert_eq!(err.to_string(), "Invalid email address: bad-address");
    }

    #[test]
    fn empty_report_error_message() {
        let err = DomainError::EmptyReport;
        assert_eq!(err.to_string(), "Report must not be empty");
    }
}
