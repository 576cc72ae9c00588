//! Mailer port
//!
//! Send-only interface for outbound report emails. Sender and recipient
//! addresses are part of process-wide configuration, resolved by the
//! adapter at send time; they are deliberately absent from the request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Email delivery errors
///
/// Delivery is at-most-once: none of these are retried by the caller.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// API key, sender, or recipient is not configured
    #[error("Email credentials are not configured")]
    MissingCredentials,

    /// Configured sender or recipient address is invalid
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The transport call itself failed (network, timeout)
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The provider refused the email
    #[error("Provider rejected the email: {0}")]
    Rejected(String),
}

/// An email ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    /// Subject line
    pub subject: String,
    /// Complete HTML document for the body
    pub html_body: String,
}

impl OutboundEmail {
    /// Create a new outbound email
    pub fn new(subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Confirmation of an accepted email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id
    pub message_id: String,
}

/// Port for outbound email
#[async_trait]
pub trait MailerPort: Send + Sync {
    /// Perform exactly one send attempt for the given email
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError>;
}
