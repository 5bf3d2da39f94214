use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/session/start body. Any field may be missing or of the wrong type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub role: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: String,
    #[serde(default)]
    pub role: Value,
    pub started_at: String,
}

/// POST /api/session/submit body as the server sees it.
///
/// Fields stay untyped so a malformed submission still scores: a non-string
/// role scores with the default base, a non-array `answers` counts as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub session_id: Value,
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub answers: Value,
}

impl SubmitRequest {
    pub fn role_id(&self) -> &str {
        self.role.as_str().unwrap_or_default()
    }

    pub fn answers_count(&self) -> usize {
        self.answers.as_array().map(Vec::len).unwrap_or(0)
    }
}

/// Submission payload built by the client once every question is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub session_id: Option<String>,
    pub role: String,
    pub answers: Vec<String>,
}

impl From<Submission> for SubmitRequest {
    fn from(submission: Submission) -> Self {
        SubmitRequest {
            session_id: submission
                .session_id
                .map(Value::String)
                .unwrap_or(Value::Null),
            role: Value::String(submission.role),
            answers: Value::Array(submission.answers.into_iter().map(Value::String).collect()),
        }
    }
}
