mod config;
mod db;
mod errors;
mod models;
mod recommender;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::recommender::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InternMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    let store = Arc::new(SqliteStore::new(pool));

    // Optionally load postings shipped alongside the service
    if let Some(path) = &config.seed_data_path {
        match store.seed_internships(path).await {
            Ok(count) => info!("Seed data loaded ({count} new postings)"),
            Err(e) => tracing::warn!("Seed data skipped: {e}"),
        }
    }

    // Build the scoring engine over the store seam
    let engine = Arc::new(RecommendationEngine::new(
        store.clone(),
        config.cache_max_age_hours,
    ));

    let state = AppState {
        config: config.clone(),
        store,
        engine,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
