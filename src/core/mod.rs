// Core algorithm exports
pub mod analytics;
pub mod catalog;
pub mod filters;
pub mod matcher;
pub mod reasons;
pub mod scoring;

pub use analytics::{activity_status, platform_stats, user_analytics, PlatformStats, UserAnalytics};
pub use catalog::{catalog_score, filter_and_sort};
pub use filters::{is_eligible, matching_interests, matching_tags};
pub use matcher::{SkillMatcher, MIN_MATCH_SCORE};
pub use reasons::match_reasons;
pub use scoring::calculate_match_score;
