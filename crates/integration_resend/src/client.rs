//! Resend API client

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::{
    config::ResendConfig,
    error::ResendError,
    models::{OutboundMessage, SentEmail, api},
};

/// Client for the Resend email API
#[derive(Debug)]
pub struct ResendClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
    timeout_secs: u64,
}

impl ResendClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns [`ResendError::MissingCredentials`] when no API key is
    /// configured, or a connection error if the HTTP client cannot be
    /// built.
    pub fn new(config: &ResendConfig) -> Result<Self, ResendError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ResendError::MissingCredentials)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResendError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Send one email
    ///
    /// Performs exactly one POST; the caller owns any at-most-once
    /// bookkeeping above this.
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    pub async fn send(&self, message: &OutboundMessage) -> Result<SentEmail, ResendError> {
        let url = format!("{}/emails", self.base_url);

        debug!(url = %url, to = %message.to, "Sending email");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(message)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResendError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    ResendError::ConnectionFailed(e.to_string())
                } else {
                    ResendError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Resend answered");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(ResendError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ResendError::AuthenticationFailed(
                "Invalid Resend API key".to_string(),
            ));
        }

        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
            || status == reqwest::StatusCode::BAD_REQUEST
        {
            let detail = Self::error_detail(response).await;
            return Err(ResendError::Rejected(detail));
        }

        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            warn!(status = %status, detail = %detail, "Unexpected Resend response");
            return Err(ResendError::RequestFailed(format!(
                "HTTP {status}: {detail}"
            )));
        }

        let accepted: api::SendResponse = response
            .json()
            .await
            .map_err(|e| ResendError::ParseError(e.to_string()))?;

        Ok(SentEmail {
            id: accepted.id,
            sent_at: chrono::Utc::now(),
        })
    }

    /// Extract the provider's error message from a failed response
    async fn error_detail(response: reqwest::Response) -> String {
        let status = response.status();
        response
            .json::<api::ErrorResponse>()
            .await
            .ok()
            .filter(|body| !body.message.is_empty())
            .map_or_else(|| format!("HTTP {status}"), |body| body.message)
    }
}
