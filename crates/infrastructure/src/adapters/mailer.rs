//! Mailer adapter - implements MailerPort over integration_resend
//!
//! Sender and recipient addresses and credentials are resolved from
//! configuration at send time. Incomplete configuration fails the send
//! loudly instead of silently skipping it.

use application::ports::{DeliveryError, DeliveryReceipt, MailerPort, OutboundEmail};
use async_trait::async_trait;
use domain::EmailAddress;
use integration_resend::{OutboundMessage, ResendClient, ResendError};
use tracing::instrument;

use crate::config::EmailConfig;

/// Adapter for Resend-compatible email delivery
#[derive(Debug)]
pub struct ResendMailerAdapter {
    client: Option<ResendClient>,
    from: Option<String>,
    to: Option<String>,
}

impl ResendMailerAdapter {
    /// Create a new adapter
    ///
    /// Construction never fails: a missing API key only surfaces when a
    /// send is attempted.
    pub fn new(config: &EmailConfig) -> Self {
        let client = ResendClient::new(&config.resend()).ok();

        Self {
            client,
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }

    /// Resolve and validate a configured address
    fn address(value: Option<&str>, role: &str) -> Result<String, DeliveryError> {
        let raw = value
            .ok_or_else(|| DeliveryError::InvalidAddress(format!("{role} address not configured")))?;

        let address = EmailAddress::new(raw)
            .map_err(|_| DeliveryError::InvalidAddress(format!("{role} address: {raw}")))?;

        Ok(address.as_str().to_string())
    }

    /// Convert integration errors to delivery errors
    fn map_error(e: ResendError) -> DeliveryError {
        match e {
            ResendError::MissingCredentials => DeliveryError::MissingCredentials,
            ResendError::Rejected(msg) => DeliveryError::Rejected(msg),
            other => DeliveryError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl MailerPort for ResendMailerAdapter {
    #[instrument(skip(self, email), fields(subject = %email.subject))]
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let client = self
            .client
            .as_ref()
            .ok_or(DeliveryError::MissingCredentials)?;

        let from = Self::address(self.from.as_deref(), "sender")?;
        let to = Self::address(self.to.as_deref(), "recipient")?;

        let message = OutboundMessage {
            from,
            to,
            subject: email.subject.clone(),
            html: email.html_body.clone(),
        };

        let sent = client.send(&message).await.map_err(Self::map_error)?;

        Ok(DeliveryReceipt {
            message_id: sent.id,
        })
    }
}
