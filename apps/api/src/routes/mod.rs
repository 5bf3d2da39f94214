pub mod extract;
pub mod health;

use axum::{
    extract::OriginalUri,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::session::handlers as session;
use crate::state::AppState;

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}

/// API routes under `/api`; every other path is served from the static
/// directory, falling back to its `index.html` so client-side routes load.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/roles", get(catalog::handle_list_roles))
        .route("/questions", get(catalog::handle_questions))
        .route("/session/start", post(session::handle_start_session))
        .route("/session/submit", post(session::handle_submit_session))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback_service(spa)
        .with_state(state)
}
