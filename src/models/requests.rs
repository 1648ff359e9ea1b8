use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::{Difficulty, MeetingType, MatchingAlgorithm, SkillFormat};

/// Request to sign in (or sign up) with a university email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
}

/// Request to publish a new skill listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSkillRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_credits")]
    pub credits: u32,
    #[validate(length(min = 1))]
    #[serde(alias = "category_id", alias = "category")]
    pub category_id: String,
    pub difficulty: Difficulty,
    #[serde(default = "default_duration")]
    pub duration: String,
    pub format: SkillFormat,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_credits() -> u32 {
    3
}

fn default_duration() -> String {
    "2-3 hours".to_string()
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub notifications: Option<bool>,
    pub public_profile: Option<bool>,
    pub matching_algorithm: Option<MatchingAlgorithm>,
    pub preferred_meeting_type: Option<MeetingType>,
}

/// Request to swap credits for a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
}

/// Catalog browse filters; "all" disables a filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_all")]
    pub category: String,
    #[serde(default = "default_all")]
    pub difficulty: String,
}

fn default_all() -> String {
    "all".to_string()
}

/// Query for personalised recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id")]
    pub user_id: String,
    pub limit: Option<usize>,
}
