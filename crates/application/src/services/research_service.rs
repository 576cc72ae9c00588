//! Research service - query intake and streaming presentation boundary
//!
//! Sits between the display layer and the opaque research pipeline. The
//! stream it returns never yields errors: pipeline failures become a
//! terminal chunk describing the failure, so the display loop cannot be
//! aborted by an unhandled fault. Cancellation is cooperative and checked
//! between chunk emissions.

use std::{fmt, pin::Pin, sync::Arc};

use domain::ResearchQuery;
use futures::{Stream, StreamExt, stream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{PipelineStream, ReportEvent, ResearchPort},
};

/// Notice appended to the last known content when a run is cancelled
const CANCELLED_NOTICE: &str = "_Research cancelled._";

/// Infallible, always-terminating chunk stream handed to the display layer
pub type PresentedStream = Pin<Box<dyn Stream<Item = ReportEvent> + Send>>;

/// Per-stream state for the presentation wrapper
struct StreamState {
    inner: Option<PipelineStream>,
    cancel: CancellationToken,
    last_content: String,
}

/// Service producing displayable report streams from user queries
pub struct ResearchService {
    pipeline: Arc<dyn ResearchPort>,
}

impl fmt::Debug for ResearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResearchService").finish_non_exhaustive()
    }
}

impl ResearchService {
    /// Create a new research service
    pub fn new(pipeline: Arc<dyn ResearchPort>) -> Self {
        Self { pipeline }
    }

    /// Run a research query and return its chunk stream
    ///
    /// Empty or whitespace-only queries are rejected here, before the
    /// pipeline is invoked. Once a stream is returned it is guaranteed to
    /// be finite; a pipeline fault mid-stream surfaces as a final chunk
    /// whose text describes the failure.
    #[instrument(skip(self, query, cancel), fields(query_len = query.len()))]
    pub async fn run(
        &self,
        query: &str,
        cancel: CancellationToken,
    ) -> Result<PresentedStream, ApplicationError> {
        let query = ResearchQuery::new(query)?;

        debug!(query = %query, "Starting research stream");

        let stream = match self.pipeline.produce_report(&query).await {
            Ok(inner) => Self::presented(inner, cancel),
            Err(error) => {
                warn!(error = %error, "Research pipeline failed to start");
                Self::failed(&error)
            },
        };

        Ok(stream)
    }

    /// Check whether the research pipeline backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.pipeline.is_healthy().await
    }

    /// Wrap a raw pipeline stream into the display contract
    fn presented(inner: PipelineStream, cancel: CancellationToken) -> PresentedStream {
        let state = StreamState {
            inner: Some(inner),
            cancel,
            last_content: String::new(),
        };

        Box::pin(stream::unfold(state, |state| async move {
            let StreamState {
                mut inner,
                cancel,
                mut last_content,
            } = state;

            let stream = inner.as_mut()?;

            let event = tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    ReportEvent::terminal(with_notice(&last_content, CANCELLED_NOTICE))
                }
                next = stream.next() => match next {
                    Some(Ok(event)) => event,
                    Some(Err(error)) => {
                        warn!(error = %error, "Research pipeline failed mid-stream");
                        let notice = format!("**Research failed:** {error}");
                        ReportEvent::terminal(with_notice(&last_content, &notice))
                    },
                    // Upstream completion is the end marker
                    None => return None,
                },
            };

            if event.done {
                inner = None;
            } else {
                last_content.clone_from(&event.content);
            }

            Some((
                event,
                StreamState {
                    inner,
                    cancel,
                    last_content,
                },
            ))
        }))
    }

    /// A stream whose only element reports a startup failure
    fn failed(error: &ApplicationError) -> PresentedStream {
        let event = ReportEvent::terminal(format!("**Research failed:** {error}"));
        Box::pin(stream::once(async move { event }))
    }
}

/// Append a notice to the report-so-far, keeping what was already shown
fn with_notice(last_content: &str, notice: &str) -> String {
    if last_content.trim().is_empty() {
        notice.to_string()
    } else {
        format!("{last_content}\n\n---\n\n{notice}")
    }
}
