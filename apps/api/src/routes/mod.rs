pub mod health;
pub mod internships;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommender::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations/:candidate_id",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/internships",
            get(internships::handle_list_internships),
        )
        .route(
            "/api/v1/internships/:id",
            get(internships::handle_get_internship),
        )
        .route(
            "/api/v1/maintenance/cleanup",
            post(handlers::handle_cleanup),
        )
        .with_state(state)
}
