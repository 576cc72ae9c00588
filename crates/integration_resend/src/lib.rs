#![forbid(unsafe_code)]
//! Resend email integration for DeepBrief
//!
//! Thin client for the Resend HTTP API (<https://resend.com/docs/api-reference>):
//! one authenticated POST per email, no batching, no retry. Works against
//! any Resend-compatible endpoint, which keeps the tests self-contained.

mod client;
mod config;
mod error;
mod models;

pub use client::ResendClient;
pub use config::ResendConfig;
pub use error::ResendError;
pub use models::{OutboundMessage, SentEmail};
