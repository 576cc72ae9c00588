//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement them.

mod mailer_port;
mod research_port;

pub use mailer_port::{DeliveryError, DeliveryReceipt, MailerPort, OutboundEmail};
pub use research_port::{PipelineStream, ReportEvent, ResearchPort};
