//! Notifier service - turns a finished report into one outbound email
//!
//! The report markdown is rendered to a standalone HTML document, the
//! subject line is derived from the report, and the mailer port is invoked
//! exactly once. Delivery is at-most-once: failures come back as a status
//! value, never as a retry.
//!
//! Callers that drive this service from an instructed agent must uphold
//! the "one send per completed report" rule themselves; the service only
//! guarantees a single transport call per invocation.

use std::{fmt, sync::Arc};

use domain::Report;
use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::ports::{MailerPort, OutboundEmail};

/// Outcome of a report dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// The provider accepted the email
    Success {
        /// Provider-assigned message id
        message_id: String,
    },
    /// The send attempt failed; no retry is made
    Failure {
        /// Transport error detail
        reason: String,
    },
}

impl DeliveryStatus {
    /// Whether the email was accepted
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Service dispatching finished reports by email
pub struct NotifierService {
    mailer: Arc<dyn MailerPort>,
}

impl fmt::Debug for NotifierService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifierService").finish_non_exhaustive()
    }
}

impl NotifierService {
    /// Create a new notifier service
    pub fn new(mailer: Arc<dyn MailerPort>) -> Self {
        Self { mailer }
    }

    /// Format the report as HTML and perform one send attempt
    #[instrument(skip(self, report), fields(report_len = report.markdown().len()))]
    pub async fn send_report(&self, report: &Report) -> DeliveryStatus {
        let email = OutboundEmail::new(report.subject(), render_html(report));

        match self.mailer.send(&email).await {
            Ok(receipt) => {
                info!(message_id = %receipt.message_id, "Report email dispatched");
                DeliveryStatus::Success {
                    message_id: receipt.message_id,
                }
            },
            Err(error) => {
                warn!(error = %error, "Report email delivery failed");
                DeliveryStatus::Failure {
                    reason: error.to_string(),
                }
            },
        }
    }
}

/// Render report markdown into a standalone HTML document
fn render_html(report: &Report) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(report.markdown(), options);
    let mut body = String::with_capacity(report.markdown().len() * 2);
    html::push_html(&mut body, parser);

    let title = report
        .subject()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body style=\"font-family: Georgia, serif; max-width: 42em; margin: 0 auto; padding: 1.5em; line-height: 1.6;\">\n\
         {body}\
         </body>\n\
         </html>\n",
    )
}
