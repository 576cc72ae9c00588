//! Report email handler

use application::DeliveryStatus;
use axum::{Json, extract::State};
use domain::Report;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Email dispatch request body
#[derive(Debug, Deserialize)]
pub struct EmailReportRequest {
    /// Finished report markdown
    pub report: String,
}

/// Dispatch a finished report as an HTML email
///
/// Exactly one send attempt is made; the outcome is returned as a status
/// object rather than an error so the caller can decide how to surface a
/// failure. Callers are expected to invoke this once per completed
/// report.
#[instrument(skip(state, request), fields(report_len = request.report.len()))]
pub async fn email_report(
    State(state): State<AppState>,
    Json(request): Json<EmailReportRequest>,
) -> Result<Json<DeliveryStatus>, ApiError> {
    let report = Report::new(request.report)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let status = state.notifier_service.send_report(&report).await;

    Ok(Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_report_request_deserialize() {
        let json = r##"{"report": "# Findings\n\nBody"}"##;
        let request: EmailReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.report.starts_with("# Findings"));
    }

    #[test]
    fn email_report_request_rejects_missing_field() {
        let result = serde_json::from_str::<EmailReportRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn delivery_status_success_shape() {
        let status = DeliveryStatus::Success {
            message_id: "e-1".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"success\""));
    }

    #[test]
    fn delivery_status_failure_shape() {
        let status = DeliveryStatus::Failure {
            reason: "transport down".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"failure\""));
        assert!(json.contains("transport down"));
    }
}
