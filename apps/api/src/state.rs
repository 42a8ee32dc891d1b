use std::sync::Arc;

use crate::analysis::pipeline::JobAnalyzer;
use crate::config::Config;
use crate::storage::repository::AnalysisRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyses: AnalysisRepository,
    /// Compiled once at startup; analysis itself is read-only.
    pub analyzer: Arc<JobAnalyzer>,
    pub config: Config,
}
