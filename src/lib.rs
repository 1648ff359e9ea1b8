//! Skill Swap - matching and catalog service for a student skill swap marketplace
//!
//! Students list skills they can teach, browse each other's listings and spend
//! credits to swap for them. This library provides the recommendation engine,
//! catalog ranking, analytics and the in-memory marketplace store behind the
//! HTTP service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{SkillMatcher, filter_and_sort};
pub use models::{User, Skill, SkillMatch, MatchingWeights, Difficulty, SkillFormat, MeetingType};
pub use services::{MarketplaceStore, MarketplaceError};
