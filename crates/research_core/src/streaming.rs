//! Streaming response handling for the research service
//!
//! The service answers with NDJSON. Lines may be split across network
//! frames, so the body is fed through a buffered line reader before
//! parsing instead of being parsed frame by frame.

use futures::{StreamExt, TryStreamExt};
use reqwest::Response;
use tokio::io::AsyncBufReadExt;
use tokio_stream::wrappers::LinesStream;
use tokio_util::io::StreamReader;
use tracing::trace;

use crate::{
    chunk::{ChunkStream, ResearchChunk},
    error::ResearchError,
};

/// Create a chunk stream from an HTTP response
pub fn create_stream(response: Response) -> ChunkStream {
    let byte_stream = response.bytes_stream().map_err(std::io::Error::other);
    let reader = StreamReader::new(byte_stream);
    let lines = LinesStream::new(reader.lines());

    let chunks = lines.filter_map(|line| async move {
        match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(parse_line(&line)),
            Err(e) => Some(Err(ResearchError::StreamError(e.to_string()))),
        }
    });

    Box::pin(chunks)
}

/// Parse one NDJSON line into a chunk
fn parse_line(line: &str) -> Result<ResearchChunk, ResearchError> {
    trace!(line = %line, "Parsing research chunk");

    serde_json::from_str(line)
        .map_err(|e| ResearchError::InvalidResponse(format!("JSON parse error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_chunk() {
        let line = r#"{"content":"Planning searches…","done":false}"#;
        let chunk = parse_line(line).unwrap();
        assert_eq!(chunk.content, "Planning searches…");
        assert!(!chunk.done);
    }

    #[test]
    fn parses_final_chunk() {
        let line = r##"{"content":"# Report\n\nBody","done":true}"##;
        let chunk = parse_line(line).unwrap();
        assert!(chunk.done);
        assert!(chunk.content.starts_with("# Report"));
    }

    #[test]
    fn rejects_invalid_json() {
        let result = parse_line("not valid json");
        assert!(matches!(result, Err(ResearchError::InvalidResponse(_))));
    }

    #[test]
    fn rejects_wrong_shape() {
        let result = parse_line(r#"{"message":"hello"}"#);
        assert!(matches!(result, Err(ResearchError::InvalidResponse(_))));
    }
}
