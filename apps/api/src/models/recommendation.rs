use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A cached score row joined with its posting's display fields, as returned
/// by the store's freshness query. Matched skills and gaps are not persisted;
/// cached results carry empty lists for both.
#[derive(Debug, Clone, FromRow)]
pub struct CachedScoreRow {
    pub candidate_id: i64,
    pub internship_id: i64,
    pub score: f64,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
}

/// A scored posting returned to callers, best-first.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub internship_id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub score: f64,
    pub explanation: String,
    pub matched_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
}

impl Recommendation {
    /// Builds a result from a cached score row. Matched skills and skill gaps
    /// are only computed on a fresh scoring pass.
    pub fn from_cached(row: CachedScoreRow) -> Self {
        Recommendation {
            internship_id: row.internship_id,
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            required_skills: row.required_skills,
            preferred_skills: row.preferred_skills,
            duration: row.duration,
            stipend: row.stipend,
            score: row.score,
            explanation: row.explanation,
            matched_skills: Vec::new(),
            skill_gaps: Vec::new(),
        }
    }
}
