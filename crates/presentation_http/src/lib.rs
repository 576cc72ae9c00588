//! DeepBrief HTTP presentation layer
//!
//! Serves the query page, the SSE research stream, and the report email
//! endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
