use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::internship::Internship;
use crate::state::AppState;
use crate::store::RecommendationStore;

#[derive(Deserialize)]
pub struct ListQuery {
    pub active_only: Option<bool>,
}

/// GET /api/v1/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Internship>>, AppError> {
    let internships = state
        .store
        .get_all_internships(params.active_only.unwrap_or(true))
        .await?;
    Ok(Json(internships))
}

/// GET /api/v1/internships/:id
pub async fn handle_get_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Internship>, AppError> {
    let internship = state
        .store
        .get_internship(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Internship {id} not found")))?;
    Ok(Json(internship))
}
