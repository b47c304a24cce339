use std::sync::Arc;

use crate::config::Config;
use crate::recommender::engine::RecommendationEngine;
use crate::store::SqliteStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Concrete store handle for the read/maintenance endpoints.
    pub store: Arc<SqliteStore>,
    /// The scoring orchestrator; holds the store behind the
    /// `RecommendationStore` seam.
    pub engine: Arc<RecommendationEngine>,
}
