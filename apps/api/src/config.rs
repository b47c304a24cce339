use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// `DATABASE_URL` is required; everything else has a documented default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Freshness window for cached scores, in hours.
    pub cache_max_age_hours: i64,
    /// Cached scores older than this many days are removed by the cleanup endpoint.
    pub cache_retention_days: i64,
    /// Number of recommendations returned when the caller does not ask for a count.
    pub default_top_n: usize,
    /// Optional JSON file of internship postings loaded at startup.
    pub seed_data_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cache_max_age_hours: std::env::var("CACHE_MAX_AGE_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse::<i64>()
                .context("CACHE_MAX_AGE_HOURS must be a whole number of hours")?,
            cache_retention_days: std::env::var("CACHE_RETENTION_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse::<i64>()
                .context("CACHE_RETENTION_DAYS must be a whole number of days")?,
            default_top_n: std::env::var("DEFAULT_TOP_N")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("DEFAULT_TOP_N must be a positive integer")?,
            seed_data_path: std::env::var("SEED_DATA_PATH").ok(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
