//! Dimension scorers: skill match, location match, education eligibility,
//! experience eligibility, and the auxiliary potential-bonus scan.
//!
//! Each scorer is pure and owns its fixed lookup tables, built once at
//! construction. Eligibility is a gate distinct from the fractional score:
//! an ineligible dimension feeds a penalty multiplier downstream rather than
//! excluding the posting outright.

use crate::recommender::normalizer::SkillSet;
use crate::recommender::similarity::TfidfVectorizer;

/// A fractional score in [0, 1] plus the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateScore {
    pub eligible: bool,
    pub score: f64,
}

impl GateScore {
    fn new(eligible: bool, score: f64) -> Self {
        GateScore { eligible, score }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skill match
// ────────────────────────────────────────────────────────────────────────────

const REQUIRED_WEIGHT: f64 = 0.7;
const PREFERRED_WEIGHT: f64 = 0.3;
const DIRECT_WEIGHT: f64 = 0.6;
const SIMILARITY_WEIGHT: f64 = 0.4;
const MAX_VOCABULARY: usize = 500;
const MAX_MATCHED_SKILLS: usize = 5;

/// Canonical (post-normalization) members of a skill category, with the
/// per-skill bonus rate and its cap.
struct SkillCategory {
    members: &'static [&'static str],
    per_skill: f64,
    cap: f64,
}

impl SkillCategory {
    fn bonus(&self, skills: &SkillSet) -> f64 {
        let hits = skills
            .iter()
            .filter(|s| self.members.contains(&s.as_str()))
            .count();
        (hits as f64 * self.per_skill).min(self.cap)
    }
}

const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "go",
    "rust",
    "react",
    "angular",
    "vue",
    "node.js",
    "html",
    "css",
    "structured query language",
    "machine learning",
    "deep learning",
    "data science",
    "docker",
    "kubernetes",
    "amazon web services",
    "google cloud platform",
    "microsoft azure",
    "postgresql",
    "mongodb",
];

const DATA_ANALYSIS_SKILLS: &[&str] = &[
    "data analysis",
    "structured query language",
    "excel",
    "statistics",
    "tableau",
    "power bi",
    "business intelligence",
    "data visualization",
    "python",
];

const PRODUCT_MANAGEMENT_SKILLS: &[&str] = &[
    "product management",
    "market research",
    "user experience",
    "user interface",
    "agile",
    "scrum",
    "product strategy",
    "stakeholder management",
    "wireframing",
    "roadmapping",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "time management",
    "problem solving",
    "adaptability",
    "creativity",
    "collaboration",
    "presentation",
    "public speaking",
];

/// Outcome of the skill dimension: score plus the matched tokens used in
/// explanations (capped at 5).
#[derive(Debug, Clone)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: Vec<String>,
}

/// Scores the overlap between a candidate's skill set and a posting's
/// required/preferred sets, with category bonuses, a size-based floor, and a
/// TF-IDF similarity blend.
pub struct SkillMatcher {
    categories: [SkillCategory; 4],
    soft_skills: SkillCategory,
    vectorizer: TfidfVectorizer,
}

impl SkillMatcher {
    pub fn new() -> Self {
        SkillMatcher {
            categories: [
                SkillCategory {
                    members: TECHNICAL_SKILLS,
                    per_skill: 0.15,
                    cap: 0.4,
                },
                SkillCategory {
                    members: DATA_ANALYSIS_SKILLS,
                    per_skill: 0.12,
                    cap: 0.3,
                },
                SkillCategory {
                    members: PRODUCT_MANAGEMENT_SKILLS,
                    per_skill: 0.2,
                    cap: 0.5,
                },
                SkillCategory {
                    members: SOFT_SKILLS,
                    per_skill: 0.1,
                    cap: 0.3,
                },
            ],
            // NOTE: soft skills are rewarded twice, once in the category pass
            // above and once standalone here. Observed scoring behavior,
            // kept as-is; see DESIGN.md.
            soft_skills: SkillCategory {
                members: SOFT_SKILLS,
                per_skill: 0.1,
                cap: 0.3,
            },
            vectorizer: TfidfVectorizer::new(MAX_VOCABULARY),
        }
    }

    pub fn score(
        &self,
        candidate: &SkillSet,
        required: &SkillSet,
        preferred: &SkillSet,
    ) -> SkillMatch {
        let required_matches: SkillSet = required.intersection(candidate).cloned().collect();
        let preferred_matches: SkillSet = preferred.intersection(candidate).cloned().collect();

        let base = if required.is_empty() {
            0.0
        } else {
            let required_score = required_matches.len() as f64 / required.len() as f64;
            let preferred_score = if preferred.is_empty() {
                0.0
            } else {
                preferred_matches.len() as f64 / preferred.len() as f64
            };
            required_score * REQUIRED_WEIGHT + preferred_score * PREFERRED_WEIGHT
        };

        // Floor by profile size, applied to the base before bonuses
        let floor = match candidate.len() {
            0 => 0.0,
            1..=5 => 0.15,
            _ => 0.25,
        };
        let mut combined = base.max(floor);

        for category in &self.categories {
            combined += category.bonus(candidate);
        }
        combined += self.soft_skills.bonus(candidate);
        combined = combined.min(1.0);

        // Blend with text similarity between the joined skill strings; fall
        // back to the direct score when either side cannot be vectorized
        let candidate_text = join(candidate);
        let posting_set: SkillSet = required.union(preferred).cloned().collect();
        let posting_text = join(&posting_set);
        let score = match self.vectorizer.similarity(&candidate_text, &posting_text) {
            Some(similarity) => combined * DIRECT_WEIGHT + similarity * SIMILARITY_WEIGHT,
            None => combined,
        };

        let matched: Vec<String> = required_matches
            .union(&preferred_matches)
            .take(MAX_MATCHED_SKILLS)
            .cloned()
            .collect();

        SkillMatch {
            score: score.clamp(0.0, 1.0),
            matched,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn join(skills: &SkillSet) -> String {
    skills.iter().cloned().collect::<Vec<_>>().join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Location match
// ────────────────────────────────────────────────────────────────────────────

const REMOTE_MARKERS: &[&str] = &["remote", "anywhere"];

const NCR_CITIES: &[&str] = &[
    "delhi",
    "gurgaon",
    "gurugram",
    "noida",
    "faridabad",
    "ghaziabad",
    "ncr",
];

const SAME_STATE_GROUPS: &[&[&str]] = &[
    &["mumbai", "pune", "nashik", "nagpur"],
    &["bangalore", "bengaluru", "mysore"],
    &["chennai", "coimbatore", "madurai"],
    &["hyderabad", "vijayawada", "visakhapatnam"],
    &["kolkata", "howrah", "durgapur"],
];

/// Matches candidate and posting locations: exact and remote at full score,
/// NCR and same-state city groups at a discount, blank sides neutral.
pub struct LocationMatcher;

impl LocationMatcher {
    pub fn new() -> Self {
        LocationMatcher
    }

    pub fn score(&self, candidate: Option<&str>, posting: Option<&str>) -> GateScore {
        let candidate = candidate.unwrap_or("").trim().to_lowercase();
        let posting = posting.unwrap_or("").trim().to_lowercase();

        // Neutral when either side is unspecified
        if candidate.is_empty() || posting.is_empty() {
            return GateScore::new(true, 0.5);
        }

        if REMOTE_MARKERS
            .iter()
            .any(|m| candidate.contains(m) || posting.contains(m))
        {
            return GateScore::new(true, 1.0);
        }

        if candidate == posting {
            return GateScore::new(true, 1.0);
        }

        let in_group = |group: &[&str], loc: &str| group.iter().any(|city| loc.contains(city));

        if in_group(NCR_CITIES, &candidate) && in_group(NCR_CITIES, &posting) {
            return GateScore::new(true, 0.9);
        }

        for group in SAME_STATE_GROUPS {
            if in_group(group, &candidate) && in_group(group, &posting) {
                return GateScore::new(true, 0.7);
            }
        }

        GateScore::new(false, 0.0)
    }
}

impl Default for LocationMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education eligibility
// ────────────────────────────────────────────────────────────────────────────

const EDUCATION_LEVELS: &[(&str, i32)] = &[
    ("high school", 1),
    ("diploma", 2),
    ("certificate", 2),
    ("bachelor's", 3),
    ("bachelor", 3),
    ("btech", 3),
    ("be", 3),
    ("bca", 3),
    ("bba", 3),
    ("master's", 4),
    ("master", 4),
    ("mtech", 4),
    ("me", 4),
    ("mca", 4),
    ("mba", 4),
    ("phd", 5),
    ("doctorate", 5),
];

/// Fixed ordinal ladder of education levels. Unknown strings map to level 0;
/// compound values ("BTech/MTech") take the highest mapped part.
pub struct EducationLadder;

impl EducationLadder {
    pub fn new() -> Self {
        EducationLadder
    }

    pub fn level(&self, education: &str) -> i32 {
        education
            .split('/')
            .map(|part| {
                let part = part.trim().to_lowercase();
                EDUCATION_LEVELS
                    .iter()
                    .find(|(name, _)| *name == part)
                    .map(|(_, level)| *level)
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }

    pub fn score(&self, candidate: Option<&str>, min_required: Option<&str>) -> GateScore {
        let required = min_required.unwrap_or("").trim();
        if required.is_empty() {
            return GateScore::new(true, 1.0);
        }

        let candidate_level = self.level(candidate.unwrap_or(""));
        let required_level = self.level(required);

        if candidate_level >= required_level {
            let bonus = (0.1 * (candidate_level - required_level) as f64).min(0.3);
            GateScore::new(true, (0.7 + bonus).min(1.0))
        } else if candidate_level >= required_level - 1 {
            // One level short is still eligible, at a flat lenient score
            GateScore::new(true, 0.5)
        } else {
            GateScore::new(false, 0.0)
        }
    }
}

impl Default for EducationLadder {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience eligibility
// ────────────────────────────────────────────────────────────────────────────

/// Gates the candidate's years of experience against the posting's
/// requirement. One year short is lenient-eligible at 0.6.
pub fn experience_score(candidate_years: i64, required_years: i64) -> GateScore {
    if required_years <= 0 {
        return GateScore::new(true, 1.0);
    }

    if candidate_years >= required_years {
        let bonus = (0.05 * (candidate_years - required_years) as f64).min(0.2);
        GateScore::new(true, (0.8 + bonus).min(1.0))
    } else if candidate_years >= required_years - 1 {
        GateScore::new(true, 0.6)
    } else {
        GateScore::new(false, 0.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Potential bonus
// ────────────────────────────────────────────────────────────────────────────

const LEARNING_SIGNALS: &[&str] = &[
    "quick learner",
    "fast learner",
    "eager to learn",
    "willingness to learn",
    "self-taught",
    "self taught",
    "adaptable",
    "curious",
    "growth mindset",
];

const LEADERSHIP_SIGNALS: &[&str] = &[
    "leadership",
    "team lead",
    "mentoring",
    "mentorship",
    "project management",
    "product management",
    "ownership",
    "initiative",
];

const ANALYTICAL_SIGNALS: &[&str] = &[
    "analytical",
    "problem solving",
    "critical thinking",
    "data analysis",
    "statistics",
    "research",
    "structured query language",
    "business intelligence",
];

const TECHNICAL_SIGNALS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "machine learning",
    "deep learning",
    "data science",
    "react",
    "node.js",
    "docker",
    "kubernetes",
    "cloud",
];

const FULL_STACK_SIGNALS: &[&str] = &[
    "full-stack",
    "front-end",
    "back-end",
    "react",
    "node.js",
    "database",
    "application programming interface",
    "html",
    "css",
];

/// Scans a candidate's skill set for growth signals that are not gating
/// dimensions: learning orientation, leadership, analytical ability, breadth
/// of technical and full-stack exposure. Keyword sets match by containment so
/// phrased tokens ("team leadership") still register.
pub struct PotentialSignals;

impl PotentialSignals {
    pub fn new() -> Self {
        PotentialSignals
    }

    pub fn score(&self, skills: &SkillSet) -> f64 {
        let contains_any = |signals: &[&str]| {
            skills
                .iter()
                .any(|skill| signals.iter().any(|signal| skill.contains(signal)))
        };
        let count_hits = |signals: &[&str]| {
            skills
                .iter()
                .filter(|skill| signals.iter().any(|signal| skill.contains(signal)))
                .count() as f64
        };

        let mut total = 0.0;
        if contains_any(LEARNING_SIGNALS) {
            total += 0.3;
        }
        if contains_any(LEADERSHIP_SIGNALS) {
            total += 0.4;
        }
        if contains_any(ANALYTICAL_SIGNALS) {
            total += 0.3;
        }
        total += (count_hits(TECHNICAL_SIGNALS) * 0.1).min(0.4);
        total += (count_hits(FULL_STACK_SIGNALS) * 0.08).min(0.3);

        total.min(1.0)
    }
}

impl Default for PotentialSignals {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    // Skill match

    #[test]
    fn test_identical_required_set_scores_at_least_base() {
        let matcher = SkillMatcher::new();
        // Tokens outside every category: no bonuses, similarity blend is 1.0
        let candidate = skills(&["pottery", "macrame"]);
        let required = skills(&["pottery", "macrame"]);
        let result = matcher.score(&candidate, &required, &SkillSet::new());
        assert!(result.score >= 0.7, "score was {}", result.score);
        assert_eq!(result.matched.len(), 2);
    }

    #[test]
    fn test_empty_required_set_scores_floor_only() {
        let matcher = SkillMatcher::new();
        let candidate = skills(&["pottery"]);
        let result = matcher.score(&candidate, &SkillSet::new(), &SkillSet::new());
        // base 0, floor 0.15, no bonuses, posting side unvectorizable
        assert!((result.score - 0.15).abs() < 1e-9, "score was {}", result.score);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let matcher = SkillMatcher::new();
        let required = skills(&["python"]);
        let result = matcher.score(&SkillSet::new(), &required, &SkillSet::new());
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_large_profile_floor() {
        let matcher = SkillMatcher::new();
        let candidate = skills(&[
            "pottery", "macrame", "origami", "juggling", "whittling", "calligraphy",
        ]);
        let required = skills(&["welding"]);
        let result = matcher.score(&candidate, &required, &SkillSet::new());
        // base 0 replaced by the six-skill floor; posting vectorizes, so the
        // blend pulls the floor down by the zero similarity
        assert!((result.score - 0.25 * 0.6).abs() < 1e-9, "score was {}", result.score);
    }

    #[test]
    fn test_category_bonuses_are_capped() {
        let matcher = SkillMatcher::new();
        // Five technical skills would earn 0.75 uncapped; the cap holds at 0.4
        let candidate = skills(&["python", "rust", "react", "docker", "kubernetes"]);
        let required = skills(&["fortran"]);
        let result = matcher.score(&candidate, &required, &SkillSet::new());
        // floor 0.15 + technical 0.4 + data-analysis 0.12 (python) = 0.67,
        // then blended against zero similarity
        assert!((result.score - 0.67 * 0.6).abs() < 1e-9, "score was {}", result.score);
    }

    #[test]
    fn test_soft_skills_counted_in_category_and_standalone_passes() {
        let matcher = SkillMatcher::new();
        let candidate = skills(&["communication", "teamwork"]);
        let required = skills(&["welding"]);
        let result = matcher.score(&candidate, &required, &SkillSet::new());
        // floor 0.15 + soft category 0.2 + standalone soft 0.2 = 0.55
        assert!((result.score - 0.55 * 0.6).abs() < 1e-9, "score was {}", result.score);
    }

    #[test]
    fn test_preferred_skills_weighted_lighter() {
        let matcher = SkillMatcher::new();
        let candidate = skills(&["pottery", "macrame"]);
        let required = skills(&["pottery"]);
        let preferred = skills(&["macrame"]);
        let result = matcher.score(&candidate, &required, &preferred);
        // base = 1.0*0.7 + 1.0*0.3 = 1.0; similarity 1.0 → full marks
        assert!((result.score - 1.0).abs() < 1e-9, "score was {}", result.score);
    }

    #[test]
    fn test_matched_skills_capped_at_five() {
        let matcher = SkillMatcher::new();
        let many: Vec<&str> = vec![
            "pottery", "macrame", "origami", "juggling", "whittling", "calligraphy", "weaving",
        ];
        let candidate = skills(&many);
        let required = skills(&many);
        let result = matcher.score(&candidate, &required, &SkillSet::new());
        assert_eq!(result.matched.len(), 5);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let matcher = SkillMatcher::new();
        let candidate = skills(&[
            "python",
            "react",
            "docker",
            "communication",
            "teamwork",
            "product management",
            "data analysis",
            "statistics",
        ]);
        let required = skills(&["python", "react"]);
        let preferred = skills(&["docker"]);
        let result = matcher.score(&candidate, &required, &preferred);
        assert!(result.score <= 1.0 && result.score >= 0.0);
    }

    // Location match

    #[test]
    fn test_location_blank_sides_are_neutral() {
        let matcher = LocationMatcher::new();
        assert_eq!(matcher.score(None, Some("Mumbai")), GateScore::new(true, 0.5));
        assert_eq!(matcher.score(Some("Mumbai"), Some("  ")), GateScore::new(true, 0.5));
    }

    #[test]
    fn test_location_exact_match() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Bangalore"), Some("bangalore")),
            GateScore::new(true, 1.0)
        );
    }

    #[test]
    fn test_location_remote_overrides_mismatch() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Mumbai"), Some("Remote - India")),
            GateScore::new(true, 1.0)
        );
    }

    #[test]
    fn test_location_anywhere_marker() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Anywhere"), Some("Chennai")),
            GateScore::new(true, 1.0)
        );
    }

    #[test]
    fn test_location_ncr_group() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Noida"), Some("New Delhi")),
            GateScore::new(true, 0.9)
        );
    }

    #[test]
    fn test_location_same_state_group() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Pune"), Some("Mumbai")),
            GateScore::new(true, 0.7)
        );
    }

    #[test]
    fn test_location_mismatch_is_ineligible() {
        let matcher = LocationMatcher::new();
        assert_eq!(
            matcher.score(Some("Kolkata"), Some("Chennai")),
            GateScore::new(false, 0.0)
        );
    }

    // Education eligibility

    #[test]
    fn test_education_unset_requirement_is_full_score() {
        let ladder = EducationLadder::new();
        assert_eq!(ladder.score(Some("Bachelor's"), None), GateScore::new(true, 1.0));
        assert_eq!(ladder.score(None, Some("")), GateScore::new(true, 1.0));
    }

    #[test]
    fn test_education_exact_level() {
        let ladder = EducationLadder::new();
        let result = ladder.score(Some("Bachelor's"), Some("Bachelor's"));
        assert!(result.eligible);
        assert!((result.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_education_bonus_capped() {
        let ladder = EducationLadder::new();
        // PhD (5) vs high school (1): bonus would be 0.4 uncapped, held to 0.3
        let result = ladder.score(Some("PhD"), Some("High School"));
        assert!(result.eligible);
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_education_one_level_short_is_lenient() {
        let ladder = EducationLadder::new();
        let result = ladder.score(Some("Bachelor's"), Some("Master's"));
        assert!(result.eligible);
        assert!((result.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_education_two_levels_short_is_ineligible() {
        let ladder = EducationLadder::new();
        let result = ladder.score(Some("High School"), Some("Master's"));
        assert!(!result.eligible);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_education_compound_takes_maximum() {
        let ladder = EducationLadder::new();
        assert_eq!(ladder.level("BTech/MTech"), 4);
        let result = ladder.score(Some("BTech/MTech"), Some("Master's"));
        assert!(result.eligible);
        assert!((result.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_education_unknown_string_maps_to_zero() {
        let ladder = EducationLadder::new();
        assert_eq!(ladder.level("bootcamp of hard knocks"), 0);
    }

    // Experience eligibility

    #[test]
    fn test_experience_zero_requirement() {
        assert_eq!(experience_score(0, 0), GateScore::new(true, 1.0));
        assert_eq!(experience_score(7, 0), GateScore::new(true, 1.0));
    }

    #[test]
    fn test_experience_meets_requirement() {
        let result = experience_score(2, 2);
        assert!(result.eligible);
        assert!((result.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_experience_surplus_bonus_capped() {
        // Ten years over: bonus would be 0.5 uncapped, held to 0.2
        let result = experience_score(12, 2);
        assert!(result.eligible);
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_one_year_short_is_lenient() {
        let result = experience_score(1, 2);
        assert!(result.eligible);
        assert!((result.score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_experience_two_years_short_is_ineligible() {
        let result = experience_score(0, 2);
        assert!(!result.eligible);
        assert_eq!(result.score, 0.0);
    }

    // Potential bonus

    #[test]
    fn test_potential_empty_skills() {
        let potential = PotentialSignals::new();
        assert_eq!(potential.score(&SkillSet::new()), 0.0);
    }

    #[test]
    fn test_potential_flat_signals() {
        let potential = PotentialSignals::new();
        let candidate = skills(&["quick learner", "team leadership"]);
        // learning 0.3 + leadership 0.4
        assert!((potential.score(&candidate) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_potential_technical_count_capped() {
        let potential = PotentialSignals::new();
        let candidate = skills(&["python", "javascript", "java", "react", "docker", "kubernetes"]);
        // six technical hits capped at 0.4; react also counts full-stack (0.08)
        let score = potential.score(&candidate);
        assert!((score - (0.4 + 0.08)).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_potential_sum_capped_at_one() {
        let potential = PotentialSignals::new();
        let candidate = skills(&[
            "quick learner",
            "leadership",
            "statistics",
            "python",
            "javascript",
            "react",
            "node.js",
            "database",
            "html",
            "css",
        ]);
        assert_eq!(potential.score(&candidate), 1.0);
    }
}
