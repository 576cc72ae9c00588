//! Research adapter - implements ResearchPort over research_core

use application::{
    error::ApplicationError,
    ports::{PipelineStream, ReportEvent, ResearchPort},
};
use async_trait::async_trait;
use domain::ResearchQuery;
use futures::StreamExt;
use research_core::{ResearchConfig, ResearchError, ResearchStreamClient};
use tracing::instrument;

/// Adapter for the external research orchestration service
#[derive(Debug)]
pub struct ResearchStreamAdapter {
    client: ResearchStreamClient,
}

impl ResearchStreamAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: ResearchConfig) -> Result<Self, ApplicationError> {
        let client = ResearchStreamClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Convert research_core errors to application errors
    fn map_error(e: ResearchError) -> ApplicationError {
        match e {
            ResearchError::ConnectionFailed(msg) => {
                ApplicationError::Pipeline(format!("research service unreachable: {msg}"))
            },
            ResearchError::Timeout(ms) => {
                ApplicationError::Pipeline(format!("research timed out after {ms}ms"))
            },
            other => ApplicationError::Pipeline(other.to_string()),
        }
    }
}

#[async_trait]
impl ResearchPort for ResearchStreamAdapter {
    #[instrument(skip(self, query))]
    async fn produce_report(
        &self,
        query: &ResearchQuery,
    ) -> Result<PipelineStream, ApplicationError> {
        let chunks = self
            .client
            .stream_report(query.as_str())
            .await
            .map_err(Self::map_error)?;

        let events = chunks.map(|item| {
            item.map(|chunk| ReportEvent {
                content: chunk.content,
                done: chunk.done,
            })
            .map_err(Self::map_error)
        });

        Ok(Box::pin(events))
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await.unwrap_or(false)
    }
}
