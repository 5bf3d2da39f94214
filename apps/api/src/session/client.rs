//! Backend client — every call the interview session makes to the service.
//!
//! `HttpBackend` talks to a running `mockview-api` over HTTP. `LocalBackend`
//! calls the catalog and scorer in-process. Calls are never retried; the
//! session decides how to degrade on failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::catalog::handlers::RolesResponse;
use crate::catalog::{Catalog, Role};
use crate::models::result::InterviewResult;
use crate::models::session::{StartSessionRequest, StartSessionResponse, Submission};
use crate::scoring::InterviewScorer;
use crate::session::handlers::new_session;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait InterviewBackend: Send + Sync {
    async fn roles(&self) -> Result<Vec<Role>, ClientError>;

    /// Question set for `role`. A response without a question array yields
    /// an empty set rather than an error.
    async fn questions(&self, role: &str) -> Result<Vec<String>, ClientError>;

    async fn start_session(&self, role: &str) -> Result<StartSessionResponse, ClientError>;

    async fn submit(&self, submission: &Submission) -> Result<InterviewResult, ClientError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpBackend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    debug!(status = status.as_u16(), bytes = body.len(), "backend call succeeded");
    Ok(serde_json::from_str(&body)?)
}

/// Keeps only string entries of `payload.questions`; anything else is empty.
fn questions_from(payload: &Value) -> Vec<String> {
    payload
        .get("questions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|q| q.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl InterviewBackend for HttpBackend {
    async fn roles(&self) -> Result<Vec<Role>, ClientError> {
        let response = self.client.get(self.url("/api/roles")).send().await?;
        let payload: RolesResponse = read_json(response).await?;
        Ok(payload.roles)
    }

    async fn questions(&self, role: &str) -> Result<Vec<String>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/questions"))
            .query(&[("role", role)])
            .send()
            .await?;
        let payload: Value = read_json(response).await?;
        Ok(questions_from(&payload))
    }

    async fn start_session(&self, role: &str) -> Result<StartSessionResponse, ClientError> {
        let body = StartSessionRequest {
            role: Value::String(role.to_string()),
        };
        self.post_json("/api/session/start", &body).await
    }

    async fn submit(&self, submission: &Submission) -> Result<InterviewResult, ClientError> {
        self.post_json("/api/session/submit", submission).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LocalBackend
// ────────────────────────────────────────────────────────────────────────────

/// In-process backend over the same catalog and scorer the server uses.
#[derive(Clone)]
pub struct LocalBackend {
    catalog: Arc<dyn Catalog>,
    scorer: Arc<dyn InterviewScorer>,
}

impl LocalBackend {
    pub fn new(catalog: Arc<dyn Catalog>, scorer: Arc<dyn InterviewScorer>) -> Self {
        Self { catalog, scorer }
    }
}

#[async_trait]
impl InterviewBackend for LocalBackend {
    async fn roles(&self) -> Result<Vec<Role>, ClientError> {
        Ok(self.catalog.roles().to_vec())
    }

    async fn questions(&self, role: &str) -> Result<Vec<String>, ClientError> {
        Ok(self.catalog.questions(role))
    }

    async fn start_session(&self, role: &str) -> Result<StartSessionResponse, ClientError> {
        Ok(new_session(Value::String(role.to_string())))
    }

    async fn submit(&self, submission: &Submission) -> Result<InterviewResult, ClientError> {
        self.scorer
            .score(&submission.clone().into())
            .await
            .map_err(|e| ClientError::Api {
                status: 500,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::scoring::{FixedJitter, MockInterviewScorer};
    use crate::state::AppState;
    use serde_json::json;

    fn local() -> LocalBackend {
        LocalBackend::new(
            Arc::new(StaticCatalog::new()),
            Arc::new(MockInterviewScorer::new(Arc::new(FixedJitter(0)))),
        )
    }

    /// Serves the real router on an ephemeral port and returns its base URL.
    async fn spawn_server() -> String {
        let state = AppState::new(Config::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_questions_from_is_lenient() {
        assert_eq!(questions_from(&json!({"questions": ["a", 1, "b"]})), vec!["a", "b"]);
        assert!(questions_from(&json!({"questions": "a"})).is_empty());
        assert!(questions_from(&json!({})).is_empty());
    }

    #[tokio::test]
    async fn test_local_backend_round() {
        let backend = local();
        assert_eq!(backend.roles().await.unwrap().len(), 6);
        assert_eq!(backend.questions("devops-engineer").await.unwrap().len(), 8);

        let started = backend.start_session("devops-engineer").await.unwrap();
        assert_eq!(started.role, json!("devops-engineer"));

        let result = backend
            .submit(&Submission {
                session_id: Some(started.session_id.clone()),
                role: "devops-engineer".to_string(),
                answers: vec!["a".to_string(), "b".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(result.answers_count, 2);
        assert_eq!(result.technical_score, 80);
        assert_eq!(result.session_id, json!(started.session_id));
    }

    #[tokio::test]
    async fn test_http_backend_against_live_router() {
        let backend = HttpBackend::new(spawn_server().await).unwrap();

        let roles = backend.roles().await.unwrap();
        assert_eq!(roles[0].id, "software-engineer");

        let questions = backend.questions("unknown role & more").await.unwrap();
        assert_eq!(questions.len(), 5);

        let started = backend.start_session("software-engineer").await.unwrap();
        assert!(uuid::Uuid::parse_str(&started.session_id).is_ok());

        let result = backend
            .submit(&Submission {
                session_id: Some(started.session_id),
                role: "software-engineer".to_string(),
                answers: vec!["a".into(), "b".into(), "c".into()],
            })
            .await
            .unwrap();
        assert_eq!(result.answers_count, 3);
        assert_eq!(result.skill_breakdown.len(), 6);
        assert_eq!(result.stress_timeline.len(), 8);
        assert!(result.overall_score <= 100);
    }

    #[tokio::test]
    async fn test_http_backend_reports_api_errors() {
        let backend = HttpBackend::new(spawn_server().await).unwrap();
        let err = backend
            .post_json::<_, Value>("/api/does-not-exist", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }), "{err}");
    }

    #[tokio::test]
    async fn test_http_backend_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{addr}")).unwrap();
        assert!(matches!(
            backend.questions("software-engineer").await,
            Err(ClientError::Http(_))
        ));
    }
}
