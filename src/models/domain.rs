use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student account with credit balance and matching preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub credits: u32,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_user_rating")]
    pub rating: f64,
    #[serde(default)]
    pub total_swaps: u32,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

fn default_user_rating() -> f64 { 4.0 }

/// Per-user settings that influence matching and visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub notifications: bool,
    pub public_profile: bool,
    pub matching_algorithm: MatchingAlgorithm,
    pub preferred_meeting_type: MeetingType,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            public_profile: true,
            matching_algorithm: MatchingAlgorithm::Advanced,
            preferred_meeting_type: MeetingType::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingAlgorithm {
    Basic,
    Advanced,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingType {
    Online,
    InPerson,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Any level string the client sends that we do not recognise
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillFormat {
    OneOnOne,
    Group,
    Workshop,
}

/// Browsing category a listing belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Feedback left by a student after a swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub skill_id: String,
    pub reviewer_id: String,
    pub reviewer_name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A skill listing offered by one user in exchange for credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub title: String,
    pub description: String,
    pub credits: u32,
    pub user_id: String,
    pub user_email: String,
    pub category: SkillCategory,
    pub difficulty: Difficulty,
    pub duration: String,
    pub format: SkillFormat,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub swaps: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

fn default_true() -> bool { true }

/// Scored recommendation for a single skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: Skill,
    pub match_score: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Record of credits moving from a buyer for a seller's listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransaction {
    pub id: String,
    pub skill_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub credits: u32,
    pub status: SwapStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Scoring weights for the matching engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingWeights {
    pub interest: f64,
    pub skill_level: f64,
    pub format: f64,
    pub rating: f64,
    pub recency: f64,
}

impl MatchingWeights {
    pub fn sum(&self) -> f64 {
        self.interest + self.skill_level + self.format + self.rating + self.recency
    }
}

impl Default for MatchingWeights {
    fn default() -> Self {
        use crate::core::scoring::{
            FORMAT_WEIGHT, INTEREST_WEIGHT, RATING_WEIGHT, RECENCY_WEIGHT, SKILL_LEVEL_WEIGHT,
        };

        Self {
            interest: INTEREST_WEIGHT,
            skill_level: SKILL_LEVEL_WEIGHT,
            format: FORMAT_WEIGHT,
            rating: RATING_WEIGHT,
            recency: RECENCY_WEIGHT,
        }
    }
}
