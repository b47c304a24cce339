//! Recommendation orchestrator: scores every active posting for a
//! candidate, ranks best-first, and warms the score cache as it goes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::recommendation::Recommendation;
use crate::recommender::hybrid::HybridScorer;
use crate::store::RecommendationStore;

pub struct RecommendationEngine {
    store: Arc<dyn RecommendationStore>,
    scorer: HybridScorer,
    cache_max_age_hours: i64,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn RecommendationStore>, cache_max_age_hours: i64) -> Self {
        RecommendationEngine {
            store,
            scorer: HybridScorer::new(),
            cache_max_age_hours,
        }
    }

    /// Top-N recommendations for a candidate, best-first.
    ///
    /// With `use_cache`, fresh cached scores short-circuit recomputation,
    /// but only when there are at least `top_n` of them. A full pass scores
    /// every active posting and writes one cache row per posting, whether or
    /// not it makes the returned top-N. An unknown candidate yields an empty
    /// result, indistinguishable from a candidate with no matches.
    pub async fn get_recommendations(
        &self,
        candidate_id: i64,
        top_n: usize,
        use_cache: bool,
    ) -> Result<Vec<Recommendation>, AppError> {
        if use_cache {
            let cached = self
                .store
                .get_cached_scores(candidate_id, self.cache_max_age_hours)
                .await?;
            if cached.len() >= top_n {
                info!("Using cached recommendations for candidate {candidate_id}");
                return Ok(cached
                    .into_iter()
                    .take(top_n)
                    .map(Recommendation::from_cached)
                    .collect());
            }
        }

        let Some(candidate) = self.store.get_candidate(candidate_id).await? else {
            warn!("Candidate {candidate_id} not found");
            return Ok(Vec::new());
        };

        let internships = self.store.get_all_internships(true).await?;

        let mut recommendations = Vec::with_capacity(internships.len());
        for internship in internships {
            let scored = self.scorer.score(&candidate, &internship);
            let skill_gaps = self
                .scorer
                .skill_gaps(candidate.skills.as_deref().unwrap_or(""), &internship);

            // Cache is best-effort; a failed write never blocks the ranking
            if !self
                .store
                .save_score(candidate_id, internship.id, scored.score, &scored.explanation)
                .await
            {
                warn!(
                    "Skipping cache write for candidate {candidate_id}, internship {}",
                    internship.id
                );
            }

            recommendations.push(Recommendation {
                internship_id: internship.id,
                title: internship.title,
                company: internship.company,
                location: internship.location,
                description: internship.description,
                required_skills: internship.required_skills,
                preferred_skills: internship.preferred_skills,
                duration: internship.duration,
                stipend: internship.stipend,
                score: scored.score,
                explanation: scored.explanation,
                matched_skills: scored.matched_skills,
                skill_gaps,
            });
        }

        // Stable sort keeps equal scores in posting order, so re-runs over
        // the same snapshot rank identically
        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(top_n);

        info!(
            "Generated {} recommendations for candidate {candidate_id}",
            recommendations.len()
        );
        Ok(recommendations)
    }
}
