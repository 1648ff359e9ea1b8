// Model exports
pub mod categories;
pub mod domain;
pub mod requests;
pub mod responses;

pub use categories::{find_category, skill_categories};
pub use domain::{
    Difficulty, MatchingAlgorithm, MatchingWeights, MeetingType, Review, Skill, SkillCategory,
    SkillFormat, SkillMatch, SwapStatus, SwapTransaction, User, UserPreferences,
};
pub use requests::{AddSkillRequest, BrowseQuery, LoginRequest, RecommendationsQuery, SwapRequest, UpdateUserRequest};
pub use responses::{AnalyticsResponse, BrowseResponse, ErrorResponse, HealthResponse, RecommendationsResponse, SwapResponse};
