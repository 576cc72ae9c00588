//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Query page
        .route("/", get(handlers::home::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Research API (v1)
        .route(
            "/v1/research/stream",
            post(handlers::research::research_stream),
        )
        // Report API (v1)
        .route("/v1/reports/email", post(handlers::report::email_report))
        // Attach state
        .with_state(state)
}
