use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A candidate profile row. Free-text fields (`skills`, `location`,
/// `education`) are parsed by the recommendation engine; a missing field is
/// treated as empty, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Education level, possibly compound ("BTech/MTech").
    pub education: Option<String>,
    /// Delimited free text, e.g. "Python, ML; react".
    pub skills: Option<String>,
    pub location: Option<String>,
    pub experience_years: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a candidate (tests and seeding).
#[derive(Debug, Clone, Deserialize)]
pub struct NewCandidate {
    pub email: String,
    pub name: String,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub experience_years: i64,
}
