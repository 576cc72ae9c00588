//! Application services

mod notifier_service;
mod research_service;

pub use notifier_service::{DeliveryStatus, NotifierService};
pub use research_service::{PresentedStream, ResearchService};
