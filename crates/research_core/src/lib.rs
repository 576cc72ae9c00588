//! Streaming client for the external research orchestration service
//!
//! The research pipeline (planning, searching, writing) runs in a separate
//! service and is opaque to this codebase. This crate speaks its wire
//! protocol: one POST per query, answered with an NDJSON stream of
//! cumulative markdown chunks, the last of which is the finished report.

pub mod chunk;
pub mod client;
pub mod config;
pub mod error;
mod streaming;

pub use chunk::{ChunkStream, ResearchChunk};
pub use client::ResearchStreamClient;
pub use config::ResearchConfig;
pub use error::ResearchError;
