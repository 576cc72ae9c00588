//! Application state shared across handlers

use std::sync::Arc;

use application::{NotifierService, ResearchService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Research streaming service
    pub research_service: Arc<ResearchService>,
    /// Report email service
    pub notifier_service: Arc<NotifierService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
