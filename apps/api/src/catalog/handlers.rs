//! Axum route handlers for the role list and question sets.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Role;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub role: String,
    pub questions: Vec<String>,
}

/// GET /api/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles().to_vec(),
    })
}

/// GET /api/questions?role=<id>
///
/// A missing or unparseable query reads as the empty role, which yields the
/// common prompts.
pub async fn handle_questions(
    State(state): State<AppState>,
    query: Option<Query<QuestionsQuery>>,
) -> Json<QuestionsResponse> {
    let role = query.map(|Query(q)| q.role).unwrap_or_default();
    let questions = state.catalog.questions(&role);
    tracing::debug!(
        role = %role,
        known = state.catalog.find_role(&role).is_some(),
        count = questions.len(),
        "serving question set"
    );
    Json(QuestionsResponse { role, questions })
}
