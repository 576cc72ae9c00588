//! Research client errors

use thiserror::Error;

/// Errors that can occur while talking to the research service
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Failed to connect to the research service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the research service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout waiting for the research service
    #[error("Research timeout after {0}ms")]
    Timeout(u64),

    /// Server-side failure
    #[error("Server error: {0}")]
    ServerError(String),

    /// Streaming error mid-response
    #[error("Stream error: {0}")]
    StreamError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_message() {
        let err = ResearchError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn timeout_message_includes_duration() {
        let err = ResearchError::Timeout(300_000);
        assert_eq!(err.to_string(), "Research timeout after 300000ms");
    }

    #[test]
    fn invalid_response_message() {
        let err = ResearchError::InvalidResponse("bad json".to_string());
        assert_eq!(err.to_string(), "Invalid response: bad json");
    }
}
