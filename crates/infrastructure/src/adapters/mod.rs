//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod mailer;
mod research;

pub use mailer::ResendMailerAdapter;
pub use research::ResearchStreamAdapter;
