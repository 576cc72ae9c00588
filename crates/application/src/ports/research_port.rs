//! Research pipeline port
//!
//! The research orchestration itself is an opaque external collaborator;
//! this port models it as "query in, lazy chunk stream out" so the
//! presenter and notifier are testable without the real pipeline.

use std::pin::Pin;

use async_trait::async_trait;
use domain::ResearchQuery;
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One emission from the research pipeline
///
/// Chunks are cumulative: each `content` is the complete report-so-far and
/// replaces whatever was displayed before, not a diff. The final chunk
/// carries `done = true` and is the finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEvent {
    /// Full rendering of the report so far
    pub content: String,
    /// Whether this is the final chunk
    pub done: bool,
}

impl ReportEvent {
    /// An intermediate chunk
    pub fn partial(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// The final chunk of a stream
    pub fn terminal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: true,
        }
    }
}

/// Raw chunk stream as produced by a pipeline adapter; may fail mid-stream
pub type PipelineStream =
    Pin<Box<dyn Stream<Item = Result<ReportEvent, ApplicationError>> + Send>>;

/// Port for the research pipeline
#[async_trait]
pub trait ResearchPort: Send + Sync {
    /// Start a research run and return its chunk stream
    ///
    /// Every call produces a fresh stream; streams are restartable per
    /// call, never resumable mid-stream, and share no state.
    async fn produce_report(
        &self,
        query: &ResearchQuery,
    ) -> Result<PipelineStream, ApplicationError>;

    /// Check whether the pipeline backend is reachable
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_event_is_not_done() {
        let event = ReportEvent::partial("Searching sources…");
        assert_eq!(event.content, "Searching sources…");
        assert!(!event.done);
    }

    #[test]
    fn terminal_event_is_done() {
        let event = ReportEvent::terminal("# Report\n\nFindings.");
        assert!(event.done);
    }

    #[test]
    fn event_serialization() {
        let event = ReportEvent::partial("chunk");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"content\":\"chunk\""));
        assert!(json.contains("\"done\":false"));
    }

    #[test]
    fn event_deserialization() {
        let json = r##"{"content":"# Done","done":true}"##;
        let event: ReportEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.content, "# Done");
        assert!(event.done);
    }
}
