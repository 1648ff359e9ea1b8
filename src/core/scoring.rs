use chrono::{DateTime, Utc};
use crate::models::{Difficulty, MatchingWeights, MeetingType, Skill, SkillFormat, User};
use crate::core::filters::matching_tags;

pub const INTEREST_WEIGHT: f64 = 0.40;
pub const SKILL_LEVEL_WEIGHT: f64 = 0.20;
pub const FORMAT_WEIGHT: f64 = 0.15;
pub const RATING_WEIGHT: f64 = 0.15;
pub const RECENCY_WEIGHT: f64 = 0.10;

/// Completed swaps after which intermediate listings fit perfectly
pub const INTERMEDIATE_EXPERIENCE: u32 = 5;
/// Completed swaps after which advanced listings fit perfectly
pub const ADVANCED_EXPERIENCE: u32 = 15;

/// Days over which the recency score decays linearly to zero
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

pub const MAX_RATING: f64 = 5.0;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Calculate a match score (0-1) for a skill from the user's point of view
///
/// Scoring formula:
/// score = min(
///     interest * 0.40 +       # share of tags overlapping the user's interests
///     skill_level * 0.20 +    # difficulty vs. swap experience
///     format * 0.15 +         # listing format vs. preferred meeting type
///     rating * 0.15 +         # listing rating / 5
///     recency * 0.10,         # linear decay over 30 days since last update
///     1
/// )
pub fn calculate_match_score(
    user: &User,
    skill: &Skill,
    weights: &MatchingWeights,
    now: DateTime<Utc>,
) -> f64 {
    let total_score = interest_score(user, skill) * weights.interest
        + skill_level_score(user.total_swaps, skill.difficulty) * weights.skill_level
        + format_score(user.preferences.preferred_meeting_type, skill.format) * weights.format
        + rating_score(skill.rating) * weights.rating
        + recency_score(skill.updated_at, now) * weights.recency;

    total_score.min(1.0)
}

/// Fraction of the skill's tags that overlap the user's interests (0-1)
#[inline]
pub fn interest_score(user: &User, skill: &Skill) -> f64 {
    let matched = matching_tags(user, skill).len() as f64;
    matched / skill.tags.len().max(1) as f64
}

/// Step function of the user's experience against the listing difficulty (0-1)
#[inline]
pub fn skill_level_score(total_swaps: u32, difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Beginner => 1.0,
        Difficulty::Intermediate => {
            if total_swaps >= INTERMEDIATE_EXPERIENCE { 1.0 } else { 0.7 }
        }
        Difficulty::Advanced => {
            if total_swaps >= ADVANCED_EXPERIENCE { 1.0 } else { 0.5 }
        }
        Difficulty::Unknown => 0.8,
    }
}

/// Listing format against the user's preferred meeting type (0-1)
///
/// Only two combinations earn the 0.9 bonus; everything else that is not
/// covered by a "both" preference falls back to 0.7.
#[inline]
pub fn format_score(meeting_type: MeetingType, format: SkillFormat) -> f64 {
    match (meeting_type, format) {
        (MeetingType::Both, _) => 1.0,
        (MeetingType::Online, SkillFormat::OneOnOne) => 0.9,
        (MeetingType::InPerson, SkillFormat::Group) => 0.9,
        _ => 0.7,
    }
}

/// Linear map of the 0-5 rating scale to 0-1
#[inline]
pub fn rating_score(rating: f64) -> f64 {
    rating / MAX_RATING
}

/// Linear decay from 1 (updated now) to 0 (updated 30+ days ago)
#[inline]
pub fn recency_score(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_since_update = (now - updated_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    (1.0 - days_since_update / RECENCY_WINDOW_DAYS).clamp(0.0, 1.0)
}
