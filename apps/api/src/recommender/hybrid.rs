//! Hybrid scorer: the weighted combination of the dimension scores, eligibility
//! penalties, a total-score floor, and the human-readable explanation string.

use crate::models::candidate::Candidate;
use crate::models::internship::Internship;
use crate::recommender::dimensions::{
    experience_score, EducationLadder, GateScore, LocationMatcher, PotentialSignals, SkillMatcher,
};
use crate::recommender::normalizer::{SkillNormalizer, SkillSet};

const SKILL_WEIGHT: f64 = 0.45;
const LOCATION_WEIGHT: f64 = 0.20;
const EDUCATION_WEIGHT: f64 = 0.15;
const EXPERIENCE_WEIGHT: f64 = 0.10;
const POTENTIAL_WEIGHT: f64 = 0.10;

/// Applied when both education and experience gates fail.
const BOTH_INELIGIBLE_PENALTY: f64 = 0.3;
/// Applied when exactly one of the two gates fails.
const ONE_INELIGIBLE_PENALTY: f64 = 0.7;
/// Totals below this are clamped up so no match reads as hopeless.
const MIN_TOTAL_SCORE: f64 = 0.1;
/// Totals below this earn an extra encouragement line in the explanation.
const ENCOURAGEMENT_THRESHOLD: f64 = 0.3;

const MAX_REQUIRED_GAPS: usize = 3;
const MAX_PREFERRED_GAPS: usize = 2;
const MAX_SKILL_GAPS: usize = 5;

/// A fully combined score for one (candidate, posting) pair.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub score: f64,
    pub explanation: String,
    pub matched_skills: Vec<String>,
}

/// Combines the four dimension scorers and the potential bonus into a single
/// suitability score in [0, 1]. Stateless across calls; all lookup tables are
/// built once at construction.
pub struct HybridScorer {
    normalizer: SkillNormalizer,
    skills: SkillMatcher,
    location: LocationMatcher,
    education: EducationLadder,
    potential: PotentialSignals,
}

impl HybridScorer {
    pub fn new() -> Self {
        HybridScorer {
            normalizer: SkillNormalizer::new(),
            skills: SkillMatcher::new(),
            location: LocationMatcher::new(),
            education: EducationLadder::new(),
            potential: PotentialSignals::new(),
        }
    }

    pub fn score(&self, candidate: &Candidate, internship: &Internship) -> ScoredMatch {
        let candidate_set = self
            .normalizer
            .extract_skill_set(candidate.skills.as_deref().unwrap_or(""));
        let required_set = self
            .normalizer
            .extract_skill_set(internship.required_skills.as_deref().unwrap_or(""));
        let preferred_set = self
            .normalizer
            .extract_skill_set(internship.preferred_skills.as_deref().unwrap_or(""));

        let skill = self.skills.score(&candidate_set, &required_set, &preferred_set);
        let location = self
            .location
            .score(candidate.location.as_deref(), Some(&internship.location));
        let education = self.education.score(
            candidate.education.as_deref(),
            internship.min_education.as_deref(),
        );
        let experience =
            experience_score(candidate.experience_years, internship.experience_required);
        let potential = self.potential.score(&candidate_set);

        let mut total = skill.score * SKILL_WEIGHT
            + location.score * LOCATION_WEIGHT
            + education.score * EDUCATION_WEIGHT
            + experience.score * EXPERIENCE_WEIGHT
            + potential * POTENTIAL_WEIGHT;

        // Failing a gate penalizes heavily but never excludes outright
        total = match (education.eligible, experience.eligible) {
            (false, false) => total * BOTH_INELIGIBLE_PENALTY,
            (true, true) => total,
            _ => total * ONE_INELIGIBLE_PENALTY,
        };

        if total < MIN_TOTAL_SCORE {
            total = MIN_TOTAL_SCORE;
        }
        let total = total.clamp(0.0, 1.0);

        let explanation = self.build_explanation(
            candidate,
            internship,
            &skill.matched,
            &candidate_set,
            location,
            education,
            experience,
            total,
        );

        ScoredMatch {
            score: total,
            explanation,
            matched_skills: skill.matched,
        }
    }

    /// Skills the candidate should pick up to qualify better: up to three
    /// missing required skills, then up to two missing preferred ones.
    pub fn skill_gaps(&self, candidate_skills: &str, internship: &Internship) -> Vec<String> {
        let required_text = internship.required_skills.as_deref().unwrap_or("");
        if required_text.trim().is_empty() {
            return Vec::new();
        }

        let candidate = self.normalizer.extract_skill_set(candidate_skills);
        let required = self.normalizer.extract_skill_set(required_text);
        let preferred = self
            .normalizer
            .extract_skill_set(internship.preferred_skills.as_deref().unwrap_or(""));

        let mut gaps: Vec<String> = required
            .difference(&candidate)
            .take(MAX_REQUIRED_GAPS)
            .cloned()
            .collect();
        gaps.extend(
            preferred
                .difference(&candidate)
                .take(MAX_PREFERRED_GAPS)
                .cloned(),
        );
        gaps.truncate(MAX_SKILL_GAPS);
        gaps
    }

    #[allow(clippy::too_many_arguments)]
    fn build_explanation(
        &self,
        candidate: &Candidate,
        internship: &Internship,
        matched: &[String],
        candidate_skills: &SkillSet,
        location: GateScore,
        education: GateScore,
        experience: GateScore,
        total: f64,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !matched.is_empty() {
            let top: Vec<&str> = matched.iter().take(3).map(String::as_str).collect();
            parts.push(format!("Skills match: {}", top.join(", ")));
        } else if !candidate_skills.is_empty() {
            let top: Vec<&str> = candidate_skills.iter().take(3).map(String::as_str).collect();
            parts.push(format!("Transferable skills: {}", top.join(", ")));
        } else {
            parts.push("Fresh perspective welcome!".to_string());
        }

        let candidate_location = candidate.location.as_deref().unwrap_or("").trim();
        if location.eligible && !candidate_location.is_empty() {
            let posting_location = internship.location.trim().to_lowercase();
            if posting_location.contains("remote") {
                parts.push("Remote opportunity".to_string());
            } else if candidate_location.to_lowercase() == posting_location {
                parts.push(format!("Location match: {candidate_location}"));
            }
        }

        if education.eligible && education.score > 0.7 {
            parts.push(format!(
                "Education: {}",
                candidate.education.as_deref().unwrap_or("Qualified")
            ));
        }

        if experience.eligible {
            if candidate.experience_years > 0 {
                parts.push(format!("Experience: {} years", candidate.experience_years));
            } else {
                parts.push("Perfect for entry-level role".to_string());
            }
        }

        if total < ENCOURAGEMENT_THRESHOLD {
            parts.push("Keep building your skills - you could be a great fit soon!".to_string());
        }

        if parts.is_empty() {
            "Good potential match".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

impl Default for HybridScorer {
    fn default() -> Self {
        Self::new()
    }
}
