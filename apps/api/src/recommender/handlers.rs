use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::recommendation::Recommendation;
use crate::state::AppState;
use crate::store::RecommendationStore;

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub top_n: Option<usize>,
    /// When true, skip the cache and rescore every active posting.
    pub refresh: Option<bool>,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub candidate_id: i64,
    pub count: usize,
    pub recommendations: Vec<Recommendation>,
}

/// GET /api/v1/recommendations/:candidate_id
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let top_n = params.top_n.unwrap_or(state.config.default_top_n);
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }
    let use_cache = !params.refresh.unwrap_or(false);

    let recommendations = state
        .engine
        .get_recommendations(candidate_id, top_n, use_cache)
        .await?;

    Ok(Json(RecommendationsResponse {
        candidate_id,
        count: recommendations.len(),
        recommendations,
    }))
}

#[derive(Deserialize)]
pub struct CleanupQuery {
    pub days: Option<i64>,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    pub removed: u64,
    pub days: i64,
}

/// POST /api/v1/maintenance/cleanup
/// Cache rows are append-only and unbounded; this is the retention knob.
pub async fn handle_cleanup(
    State(state): State<AppState>,
    Query(params): Query<CleanupQuery>,
) -> Result<Json<CleanupResponse>, AppError> {
    let days = params.days.unwrap_or(state.config.cache_retention_days);
    if days < 0 {
        return Err(AppError::Validation("days must be non-negative".to_string()));
    }

    let removed = state.store.clear_old_scores(days).await?;
    Ok(Json(CleanupResponse { removed, days }))
}
