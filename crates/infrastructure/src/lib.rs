//! Infrastructure layer for DeepBrief
//!
//! Configuration loading and the adapters that bind application ports to
//! the concrete research and email integrations.

pub mod adapters;
pub mod config;

pub use adapters::{ResearchStreamAdapter, ResendMailerAdapter};
pub use config::{AppConfig, EmailConfig, Environment, ServerConfig};
