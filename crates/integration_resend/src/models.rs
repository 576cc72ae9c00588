//! Resend wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully addressed email ready for the wire
///
/// Unlike the application-level email, this carries the resolved sender
/// and recipient addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Confirmation returned after a successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Provider-assigned email id
    pub id: String,
    /// When the send call completed (client-side clock)
    pub sent_at: DateTime<Utc>,
}

/// Resend API response structures
pub(crate) mod api {
    use serde::Deserialize;

    /// Body of a successful POST /emails
    #[derive(Debug, Deserialize)]
    pub struct SendResponse {
        pub id: String,
    }

    /// Body of an error response
    #[derive(Debug, Deserialize, Default)]
    pub struct ErrorResponse {
        #[serde(default)]
        pub message: String,
    }
}
