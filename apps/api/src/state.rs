use std::sync::Arc;

use crate::catalog::{Catalog, StaticCatalog};
use crate::config::Config;
use crate::scoring::{InterviewScorer, MockInterviewScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; everything behind it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Role list and question sets. Default: StaticCatalog.
    pub catalog: Arc<dyn Catalog>,
    /// Pluggable interview scorer. Default: MockInterviewScorer with random jitter.
    pub scorer: Arc<dyn InterviewScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Arc::new(StaticCatalog::new()),
            scorer: Arc::new(MockInterviewScorer::random()),
        }
    }
}
