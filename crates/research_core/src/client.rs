//! HTTP client for the research orchestration service

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    chunk::ChunkStream, config::ResearchConfig, error::ResearchError, streaming,
};

/// Request body for a research run
#[derive(Debug, Serialize)]
struct ResearchRequest<'a> {
    query: &'a str,
    stream: bool,
}

/// Client for the research service's streaming API
#[derive(Debug, Clone)]
pub struct ResearchStreamClient {
    client: Client,
    config: ResearchConfig,
}

impl ResearchStreamClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ResearchConfig) -> Result<Self, ResearchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ResearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Start a research run and return the raw chunk stream
    ///
    /// Each call opens a fresh stream; nothing is shared between calls.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn stream_report(&self, query: &str) -> Result<ChunkStream, ResearchError> {
        let url = format!("{}/v1/research", self.config.base_url);

        debug!(url = %url, "Starting research run");

        let response = self
            .client
            .post(&url)
            .json(&ResearchRequest {
                query,
                stream: true,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResearchError::Timeout(self.config.timeout_ms)
                } else if e.is_connect() {
                    ResearchError::ConnectionFailed(e.to_string())
                } else {
                    ResearchError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Research service answered");

        if status.is_server_error() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResearchError::ServerError(format!(
                "HTTP {status}: {detail}"
            )));
        }

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResearchError::RequestFailed(format!(
                "HTTP {status}: {detail}"
            )));
        }

        Ok(streaming::create_stream(response))
    }

    /// Probe the research service's health endpoint
    pub async fn health_check(&self) -> Result<bool, ResearchError> {
        let url = format!("{}/health", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResearchError::ConnectionFailed(e.to_string()))?;

        Ok(response.status().is_success())
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
