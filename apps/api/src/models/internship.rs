use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An internship posting. `required_skills` and `preferred_skills` share the
/// candidate free-text skill format; `title`, `company`, `description`,
/// `duration` and `stipend` pass through scoring untouched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub application_deadline: Option<String>,
    pub posted_date: DateTime<Utc>,
    /// Inactive postings are excluded from scoring.
    pub is_active: bool,
    pub min_education: Option<String>,
    pub experience_required: i64,
}

/// Posting payload as it appears in the seed JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInternship {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub application_deadline: Option<String>,
    pub min_education: Option<String>,
    #[serde(default)]
    pub experience_required: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
