//! Research streaming handler

use std::{convert::Infallible, time::Duration};

use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Research stream request body
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    /// Free-text research topic
    pub query: String,
}

/// Stream a research run via SSE
///
/// Each event carries the cumulative report-so-far as JSON
/// `{"content": "...", "done": bool}`; the client replaces its display
/// with every event. Dropping the connection cancels the run between
/// chunk emissions.
#[instrument(
    skip(state, request),
    fields(query_len = request.query.len(), run_id = %Uuid::new_v4())
)]
pub async fn research_stream(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let cancel = CancellationToken::new();
    let chunks = state
        .research_service
        .run(&request.query, cancel.clone())
        .await?;

    // Cancels the run when the SSE stream is dropped (client disconnect)
    let guard = cancel.drop_guard();

    let stream = chunks.map(move |event| {
        let _keep_cancel_guard = &guard;
        let payload = serde_json::json!({
            "content": event.content,
            "done": event.done,
        });
        Ok::<_, Infallible>(Event::default().data(payload.to_string()))
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_request_deserialize() {
        let json = r#"{"query": "Future of quantum computing"}"#;
        let request: ResearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.query, "Future of quantum computing");
    }

    #[test]
    fn research_request_rejects_missing_query() {
        let result = serde_json::from_str::<ResearchRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn research_request_debug() {
        let request = ResearchRequest {
            query: "test".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("ResearchRequest"));
    }

    #[test]
    fn event_payload_shape() {
        let payload = serde_json::json!({
            "content": "# Report",
            "done": true,
        });
        let text = payload.to_string();
        assert!(text.contains("\"content\":\"# Report\""));
        assert!(text.contains("\"done\":true"));
    }
}
