use chrono::{DateTime, Utc};
use crate::models::{MatchingWeights, Skill, SkillMatch, User};
use crate::core::{
    filters::is_eligible,
    reasons::match_reasons,
    scoring::calculate_match_score,
};

/// Matches scoring at or below this value are dropped
pub const MIN_MATCH_SCORE: f64 = 0.3;

/// Skill recommendation engine - implements the eligibility/scoring pipeline
///
/// # Pipeline Stages
/// 1. Eligibility filter (not own listing, active, affordable)
/// 2. Weighted scoring and reason generation
/// 3. Score cutoff
/// 4. Stable ranking by score
///
/// The matcher holds no mutable state; a single instance can be shared
/// freely between request handlers.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    weights: MatchingWeights,
}

impl SkillMatcher {
    pub fn new(weights: MatchingWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchingWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchingWeights {
        &self.weights
    }

    /// Find skills worth recommending to a user, best first
    pub fn find_matches(&self, user: &User, skills: &[Skill]) -> Vec<SkillMatch> {
        self.find_matches_at(user, skills, Utc::now())
    }

    /// Same as [`find_matches`](Self::find_matches) with an explicit clock
    ///
    /// # Arguments
    /// * `user` - The student asking for recommendations
    /// * `skills` - Snapshot of the whole catalog
    /// * `now` - Reference time for the recency score
    ///
    /// # Returns
    /// Matches with a score above the cutoff, sorted by score (descending).
    /// Equal scores keep catalog order.
    pub fn find_matches_at(
        &self,
        user: &User,
        skills: &[Skill],
        now: DateTime<Utc>,
    ) -> Vec<SkillMatch> {
        let mut matches: Vec<SkillMatch> = skills
            .iter()
            // Stage 1: Eligibility
            .filter(|skill| is_eligible(skill, user))
            // Stage 2 & 3: Score, explain and cut off
            .filter_map(|skill| {
                let match_score = calculate_match_score(user, skill, &self.weights, now);

                if match_score > MIN_MATCH_SCORE {
                    Some(SkillMatch {
                        skill: skill.clone(),
                        match_score,
                        reasons: match_reasons(user, skill),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stage 4: sort_by is stable, so ties stay in catalog order
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
