use crate::models::{Difficulty, Skill, SkillFormat, User};
use crate::core::filters::matching_interests;
use crate::core::scoring::INTERMEDIATE_EXPERIENCE;

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 3;
/// Number of matching interests named in the interest reason
const LISTED_INTERESTS: usize = 2;

pub const HIGH_RATING_THRESHOLD: f64 = 4.5;
pub const POPULAR_SWAP_THRESHOLD: u32 = 10;

pub const REASON_HIGHLY_RATED: &str = "Highly rated by other students";
pub const REASON_POPULAR: &str = "Popular skill with many successful swaps";
pub const REASON_ONE_ON_ONE: &str = "Personalized one-on-one learning";
pub const REASON_BEGINNER: &str = "Perfect for beginners";

/// Build the human-readable explanation for a match
///
/// Reasons are checked in a fixed priority order (interests, rating,
/// popularity, format, beginner fit) and only the first three that apply
/// are kept.
pub fn match_reasons(user: &User, skill: &Skill) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    let interests = matching_interests(user, skill);
    if !interests.is_empty() {
        let listed: Vec<&str> = interests.into_iter().take(LISTED_INTERESTS).collect();
        reasons.push(format!("Matches your interests: {}", listed.join(", ")));
    }

    if skill.rating >= HIGH_RATING_THRESHOLD {
        reasons.push(REASON_HIGHLY_RATED.to_string());
    }

    if skill.swaps >= POPULAR_SWAP_THRESHOLD {
        reasons.push(REASON_POPULAR.to_string());
    }

    if skill.format == SkillFormat::OneOnOne {
        reasons.push(REASON_ONE_ON_ONE.to_string());
    }

    if skill.difficulty == Difficulty::Beginner && user.total_swaps < INTERMEDIATE_EXPERIENCE {
        reasons.push(REASON_BEGINNER.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
