//! Wire-level research chunks

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::ResearchError;

/// One NDJSON line from the research service
///
/// `content` is the cumulative report-so-far; `done` marks the final line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchChunk {
    /// Cumulative markdown content
    pub content: String,
    /// Whether this is the final chunk
    #[serde(default)]
    pub done: bool,
}

/// Type alias for the streaming response
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ResearchChunk, ResearchError>> + Send>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_deserializes() {
        let json = r###"{"content":"## Findings","done":false}"###;
        let chunk: ResearchChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content, "## Findings");
        assert!(!chunk.done);
    }

    #[test]
    fn done_defaults_to_false() {
        let json = r#"{"content":"partial"}"#;
        let chunk: ResearchChunk = serde_json::from_str(json).unwrap();
        assert!(!chunk.done);
    }

    #[test]
    fn final_chunk_deserializes() {
        let json = r##"{"content":"# Report","done":true}"##;
        let chunk: ResearchChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.done);
    }
}
