use serde::{Deserialize, Serialize};
use crate::core::analytics::{PlatformStats, UserAnalytics};
use crate::models::domain::{Skill, SkillMatch, SwapTransaction, User};

/// Response for the catalog browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub skills: Vec<Skill>,
    pub total_results: usize,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub matches: Vec<SkillMatch>,
    pub total_results: usize,
}

/// Response for a completed swap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResponse {
    pub transaction: SwapTransaction,
    pub user: User,
}

/// Personal and platform analytics for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub user: UserAnalytics,
    pub platform: PlatformStats,
    pub activity_status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
