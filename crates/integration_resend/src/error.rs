//! Resend error types

use thiserror::Error;

/// Errors that can occur while sending email through Resend
#[derive(Debug, Error)]
pub enum ResendError {
    /// No API key configured
    #[error("Resend API key is not configured")]
    MissingCredentials,

    /// API key was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider refused the email (validation, unverified domain)
    #[error("Email rejected: {0}")]
    Rejected(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// Response could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_message() {
        let err = ResendError::MissingCredentials;
        assert_eq!(err.to_string(), "Resend API key is not configured");
    }

    #[test]
    fn rejected_message_carries_detail() {
        let err = ResendError::Rejected("domain not verified".to_string());
        assert_eq!(err.to_string(), "Email rejected: domain not verified");
    }

    #[test]
    fn rate_limit_message() {
        let err = ResendError::RateLimitExceeded {
            retry_after_secs: Some(30),
        };
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn timeout_message() {
        let err = ResendError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
    }
}
