//! Store seam: the narrow persistence contract the recommendation engine
//! consumes, plus the SQLite implementation behind it.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::candidate::{Candidate, NewCandidate};
use crate::models::internship::{Internship, NewInternship};
use crate::models::recommendation::CachedScoreRow;

/// Persistence contract consumed by the recommendation engine.
///
/// Carried as `Arc<dyn RecommendationStore>` so tests and alternative
/// backends can swap in without touching the engine. `save_score` is
/// best-effort by contract: it reports failure instead of raising, and the
/// engine proceeds without the cache.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn get_candidate(&self, candidate_id: i64) -> Result<Option<Candidate>, AppError>;

    async fn get_all_internships(&self, active_only: bool) -> Result<Vec<Internship>, AppError>;

    /// Cached scores for a candidate no older than `max_age_hours`, joined
    /// with posting display fields and sorted by score descending.
    async fn get_cached_scores(
        &self,
        candidate_id: i64,
        max_age_hours: i64,
    ) -> Result<Vec<CachedScoreRow>, AppError>;

    /// Appends one cache row. Returns false on failure; never raises.
    async fn save_score(
        &self,
        candidate_id: i64,
        internship_id: i64,
        score: f64,
        explanation: &str,
    ) -> bool;

    /// Deletes cache rows older than `days`. Returns the number removed.
    async fn clear_old_scores(&self, days: i64) -> Result<u64, AppError>;
}

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    pub async fn insert_candidate(&self, candidate: &NewCandidate) -> Result<i64, AppError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO candidates (email, name, education, skills, location, experience_years, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&candidate.email)
        .bind(&candidate.name)
        .bind(&candidate.education)
        .bind(&candidate.skills)
        .bind(&candidate.location)
        .bind(candidate.experience_years)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn insert_internship(&self, internship: &NewInternship) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO internships
                (title, company, location, description, required_skills, preferred_skills,
                 duration, stipend, application_deadline, posted_date, is_active,
                 min_education, experience_required)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&internship.title)
        .bind(&internship.company)
        .bind(&internship.location)
        .bind(&internship.description)
        .bind(&internship.required_skills)
        .bind(&internship.preferred_skills)
        .bind(&internship.duration)
        .bind(&internship.stipend)
        .bind(&internship.application_deadline)
        .bind(Utc::now())
        .bind(internship.is_active)
        .bind(internship.min_education.as_deref())
        .bind(internship.experience_required)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_internship(&self, internship_id: i64) -> Result<Option<Internship>, AppError> {
        let internship: Option<Internship> =
            sqlx::query_as("SELECT * FROM internships WHERE id = ?")
                .bind(internship_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(internship)
    }

    /// Loads postings from a JSON file, skipping exact duplicates by
    /// (title, company, location, description).
    pub async fn seed_internships(&self, path: &str) -> Result<usize, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Validation(format!("Cannot read seed file '{path}': {e}")))?;
        let postings: Vec<NewInternship> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Validation(format!("Malformed seed file '{path}': {e}")))?;

        let mut inserted = 0;
        for posting in &postings {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO internships
                    (title, company, location, description, required_skills, preferred_skills,
                     duration, stipend, application_deadline, posted_date, is_active,
                     min_education, experience_required)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&posting.title)
            .bind(&posting.company)
            .bind(&posting.location)
            .bind(&posting.description)
            .bind(&posting.required_skills)
            .bind(&posting.preferred_skills)
            .bind(&posting.duration)
            .bind(&posting.stipend)
            .bind(&posting.application_deadline)
            .bind(Utc::now())
            .bind(posting.is_active)
            .bind(posting.min_education.as_deref())
            .bind(posting.experience_required)
            .execute(&self.pool)
            .await?;
            inserted += result.rows_affected() as usize;
        }

        info!("Seeded {inserted} of {} postings from {path}", postings.len());
        Ok(inserted)
    }

    #[cfg(test)]
    pub async fn count_cached_scores(&self, candidate_id: i64) -> Result<i64, AppError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM recommendations WHERE candidate_id = ?")
                .bind(candidate_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}

#[async_trait]
impl RecommendationStore for SqliteStore {
    async fn get_candidate(&self, candidate_id: i64) -> Result<Option<Candidate>, AppError> {
        let candidate: Option<Candidate> = sqlx::query_as("SELECT * FROM candidates WHERE id = ?")
            .bind(candidate_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    async fn get_all_internships(&self, active_only: bool) -> Result<Vec<Internship>, AppError> {
        let query = if active_only {
            "SELECT * FROM internships WHERE is_active = 1 ORDER BY id"
        } else {
            "SELECT * FROM internships ORDER BY id"
        };
        let internships: Vec<Internship> = sqlx::query_as(query).fetch_all(&self.pool).await?;
        Ok(internships)
    }

    async fn get_cached_scores(
        &self,
        candidate_id: i64,
        max_age_hours: i64,
    ) -> Result<Vec<CachedScoreRow>, AppError> {
        let cutoff = Utc::now() - Duration::hours(max_age_hours);
        let rows: Vec<CachedScoreRow> = sqlx::query_as(
            r#"
            SELECT r.candidate_id, r.internship_id, r.score, r.explanation, r.created_at,
                   i.title, i.company, i.location, i.description,
                   i.required_skills, i.preferred_skills, i.duration, i.stipend
            FROM recommendations r
            JOIN internships i ON r.internship_id = i.id
            WHERE r.candidate_id = ? AND r.created_at >= ?
            ORDER BY r.score DESC
            "#,
        )
        .bind(candidate_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn save_score(
        &self,
        candidate_id: i64,
        internship_id: i64,
        score: f64,
        explanation: &str,
    ) -> bool {
        let result = sqlx::query(
            r#"
            INSERT INTO recommendations (candidate_id, internship_id, score, explanation, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(candidate_id)
        .bind(internship_id)
        .bind(score)
        .bind(explanation)
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => true,
            Err(e) => {
                error!("Error saving score for candidate {candidate_id}: {e}");
                false
            }
        }
    }

    async fn clear_old_scores(&self, days: i64) -> Result<u64, AppError> {
        let cutoff = Utc::now() - Duration::days(days);
        let result = sqlx::query("DELETE FROM recommendations WHERE created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        info!("Cleared {removed} cached scores older than {days} days");
        Ok(removed)
    }
}
