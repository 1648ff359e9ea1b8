use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::models::{Skill, User};

/// Users active within this many minutes count as online
pub const ONLINE_WINDOW_MINUTES: i64 = 5;

/// Personal statistics for a user's own listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    pub total_swaps: u32,
    pub credits_earned: u64,
    pub total_views: u64,
    pub average_rating: f64,
    pub skills_shared: usize,
    /// 1-based position among all users by completed swaps
    pub swap_rank: Option<usize>,
    /// 1-based position among all users by rating
    pub rating_rank: Option<usize>,
}

/// Marketplace-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_skills: usize,
    pub total_swaps: u64,
    pub average_platform_rating: f64,
    pub online_users: usize,
}

pub fn user_analytics(user: &User, skills: &[Skill], users: &[User]) -> UserAnalytics {
    let own: Vec<&Skill> = skills.iter().filter(|s| s.user_id == user.id).collect();

    let credits_earned: u64 = own.iter().map(|s| s.swaps as u64 * s.credits as u64).sum();
    let total_views: u64 = own.iter().map(|s| s.views as u64).sum();
    let average_rating = mean(own.iter().map(|s| s.rating));

    let mut by_swaps: Vec<&User> = users.iter().collect();
    by_swaps.sort_by(|a, b| b.total_swaps.cmp(&a.total_swaps));

    let mut by_rating: Vec<&User> = users.iter().collect();
    by_rating.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    UserAnalytics {
        total_swaps: user.total_swaps,
        credits_earned,
        total_views,
        average_rating,
        skills_shared: own.len(),
        swap_rank: rank_of(&by_swaps, &user.id),
        rating_rank: rank_of(&by_rating, &user.id),
    }
}

pub fn platform_stats(users: &[User], skills: &[Skill], now: DateTime<Utc>) -> PlatformStats {
    let online_cutoff = now - Duration::minutes(ONLINE_WINDOW_MINUTES);

    PlatformStats {
        total_users: users.len(),
        total_skills: skills.len(),
        total_swaps: skills.iter().map(|s| s.swaps as u64).sum(),
        average_platform_rating: mean(skills.iter().map(|s| s.rating)),
        online_users: users.iter().filter(|u| u.last_active > online_cutoff).count(),
    }
}

/// Short "last seen" label for a profile
pub fn activity_status(last_active: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - last_active).num_minutes();

    if minutes < ONLINE_WINDOW_MINUTES {
        "Online now".to_string()
    } else if minutes < 60 {
        format!("Active {}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("Active {}h ago", minutes / 60)
    } else {
        format!("Active {}d ago", minutes / (60 * 24))
    }
}

fn rank_of(sorted: &[&User], user_id: &str) -> Option<usize> {
    sorted.iter().position(|u| u.id == user_id).map(|i| i + 1)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, SkillFormat, UserPreferences, find_category};

    fn create_user(id: &str, total_swaps: u32, rating: f64, last_active: DateTime<Utc>) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@university.edu", id),
            name: id.to_string(),
            credits: 10,
            avatar: None,
            bio: None,
            major: None,
            year: None,
            skills: vec![],
            interests: vec![],
            rating,
            total_swaps,
            joined_at: last_active,
            last_active,
            preferences: UserPreferences::default(),
        }
    }

    fn create_skill(owner: &str, credits: u32, swaps: u32, views: u32, rating: f64) -> Skill {
        Skill {
            id: format!("{}-{}", owner, credits),
            title: "Skill".to_string(),
            description: "Listing".to_string(),
            credits,
            user_id: owner.to_string(),
            user_email: format!("{}@university.edu", owner),
            category: find_category("other").unwrap(),
            difficulty: Difficulty::Beginner,
            duration: "1 hour".to_string(),
            format: SkillFormat::Workshop,
            tags: vec![],
            requirements: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active: true,
            views,
            swaps,
            rating,
            reviews: vec![],
        }
    }

    #[test]
    fn test_user_analytics() {
        let now = Utc::now();
        let users = vec![
            create_user("ana", 3, 4.9, now),
            create_user("ben", 8, 4.1, now),
            create_user("cai", 1, 4.5, now),
        ];
        let skills = vec![
            create_skill("ana", 2, 4, 10, 4.0),
            create_skill("ana", 3, 1, 5, 5.0),
            create_skill("ben", 5, 9, 40, 3.0),
        ];

        let stats = user_analytics(&users[0], &skills, &users);

        assert_eq!(stats.skills_shared, 2);
        assert_eq!(stats.credits_earned, 2 * 4 + 3 * 1);
        assert_eq!(stats.total_views, 15);
        assert!((stats.average_rating - 4.5).abs() < 1e-9);
        assert_eq!(stats.swap_rank, Some(2));
        assert_eq!(stats.rating_rank, Some(1));
    }

    #[test]
    fn test_user_without_listings() {
        let now = Utc::now();
        let users = vec![create_user("ana", 0, 4.0, now)];

        let stats = user_analytics(&users[0], &[], &users);

        assert_eq!(stats.skills_shared, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.swap_rank, Some(1));
    }

    #[test]
    fn test_platform_stats() {
        let now = Utc::now();
        let users = vec![
            create_user("ana", 0, 4.0, now - Duration::minutes(1)),
            create_user("ben", 0, 4.0, now - Duration::hours(2)),
        ];
        let skills = vec![
            create_skill("ana", 1, 3, 0, 4.0),
            create_skill("ben", 1, 7, 0, 5.0),
        ];

        let stats = platform_stats(&users, &skills, now);

        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_skills, 2);
        assert_eq!(stats.total_swaps, 10);
        assert!((stats.average_platform_rating - 4.5).abs() < 1e-9);
        assert_eq!(stats.online_users, 1);
    }

    #[test]
    fn test_activity_status() {
        let now = Utc::now();
        assert_eq!(activity_status(now - Duration::minutes(2), now), "Online now");
        assert_eq!(activity_status(now - Duration::minutes(42), now), "Active 42m ago");
        assert_eq!(activity_status(now - Duration::hours(5), now), "Active 5h ago");
        assert_eq!(activity_status(now - Duration::days(3), now), "Active 3d ago");
    }
}
