//! Axum route handlers for session start and submission.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::result::InterviewResult;
use crate::models::session::{StartSessionRequest, StartSessionResponse, SubmitRequest};
use crate::routes::extract::LenientJson;
use crate::state::AppState;

/// Opens a session record: fresh id, the role echoed back, start timestamp.
pub fn new_session(role: Value) -> StartSessionResponse {
    StartSessionResponse {
        session_id: Uuid::new_v4().to_string(),
        role,
        started_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// POST /api/session/start
pub async fn handle_start_session(
    LenientJson(request): LenientJson<StartSessionRequest>,
) -> Json<StartSessionResponse> {
    let session = new_session(request.role);
    info!(session_id = %session.session_id, role = %session.role, "interview session started");
    Json(session)
}

/// POST /api/session/submit
///
/// Scores whatever arrived; missing fields are scored as defaults.
pub async fn handle_submit_session(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<SubmitRequest>,
) -> Result<Json<InterviewResult>, AppError> {
    let result = state.scorer.score(&request).await?;
    info!(
        session_id = %request.session_id,
        role = %state.catalog.role_title(request.role_id()),
        answers = result.answers_count,
        overall = result.overall_score,
        "interview session submitted"
    );
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn test_new_session_fields() {
        let a = new_session(json!("software-engineer"));
        let b = new_session(json!("software-engineer"));
        assert_ne!(a.session_id, b.session_id);
        assert!(Uuid::parse_str(&a.session_id).is_ok());
        assert_eq!(a.role, json!("software-engineer"));
        assert!(DateTime::parse_from_rfc3339(&a.started_at).is_ok());
        assert!(a.started_at.ends_with('Z'));
    }
}
