use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::models::{
    find_category, AddSkillRequest, Skill, SwapStatus, SwapTransaction, UpdateUserRequest, User,
    UserPreferences,
};

/// Errors that can occur when mutating the marketplace
#[derive(Debug, Error, PartialEq)]
pub enum MarketplaceError {
    #[error("Please use a valid university email address ending with {0}")]
    InvalidEmailDomain(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: u32 },

    #[error("Cannot swap your own skill")]
    OwnSkill,
}

/// In-memory owner of all users, listings and swap history
///
/// The matching engine only ever sees cloned snapshots handed out by this
/// store. All writes go through it. When both collections are locked, the
/// users lock is taken first.
pub struct MarketplaceStore {
    users: RwLock<Vec<User>>,
    skills: RwLock<Vec<Skill>>,
    transactions: RwLock<Vec<SwapTransaction>>,
    email_domain: String,
    signup_credits: u32,
    default_skill_rating: f64,
}

impl MarketplaceStore {
    /// Create an empty marketplace
    pub fn new(email_domain: impl Into<String>, signup_credits: u32, default_skill_rating: f64) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            skills: RwLock::new(Vec::new()),
            transactions: RwLock::new(Vec::new()),
            email_domain: email_domain.into(),
            signup_credits,
            default_skill_rating,
        }
    }

    /// Create a marketplace pre-populated with users and listings
    pub fn with_data(mut self, users: Vec<User>, skills: Vec<Skill>) -> Self {
        self.users = RwLock::new(users);
        self.skills = RwLock::new(skills);
        self
    }

    /// Sign a student in, creating their account on first login
    pub async fn login(&self, email: &str) -> Result<User, MarketplaceError> {
        if !email.ends_with(&self.email_domain) {
            return Err(MarketplaceError::InvalidEmailDomain(self.email_domain.clone()));
        }

        let now = Utc::now();
        let mut users = self.users.write().await;

        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.last_active = now;
            tracing::debug!("Returning user signed in: {}", user.id);
            return Ok(user.clone());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: display_name_from_email(email),
            credits: self.signup_credits,
            avatar: None,
            bio: Some(String::new()),
            major: Some(String::new()),
            year: Some(String::new()),
            skills: vec![],
            interests: vec![],
            rating: 4.0,
            total_swaps: 0,
            joined_at: now,
            last_active: now,
            preferences: UserPreferences::default(),
        };

        tracing::info!("Created account {} for {}", user.id, email);
        users.push(user.clone());
        Ok(user)
    }

    /// Apply a partial profile update
    pub async fn update_user(
        &self,
        user_id: &str,
        update: UpdateUserRequest,
    ) -> Result<User, MarketplaceError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| MarketplaceError::UserNotFound(user_id.to_string()))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(major) = update.major {
            user.major = Some(major);
        }
        if let Some(year) = update.year {
            user.year = Some(year);
        }
        if let Some(skills) = update.skills {
            user.skills = clean_list(skills);
        }
        if let Some(interests) = update.interests {
            user.interests = clean_list(interests);
        }
        if let Some(notifications) = update.notifications {
            user.preferences.notifications = notifications;
        }
        if let Some(public_profile) = update.public_profile {
            user.preferences.public_profile = public_profile;
        }
        if let Some(algorithm) = update.matching_algorithm {
            user.preferences.matching_algorithm = algorithm;
        }
        if let Some(meeting_type) = update.preferred_meeting_type {
            user.preferences.preferred_meeting_type = meeting_type;
        }

        tracing::debug!("Updated profile for {}", user_id);
        Ok(user.clone())
    }

    /// Publish a new listing; newest listings come first in the catalog
    pub async fn add_skill(&self, request: AddSkillRequest) -> Result<Skill, MarketplaceError> {
        let category = find_category(&request.category_id)
            .ok_or_else(|| MarketplaceError::UnknownCategory(request.category_id.clone()))?;

        let users = self.users.read().await;
        let owner = users
            .iter()
            .find(|u| u.id == request.user_id)
            .ok_or_else(|| MarketplaceError::UserNotFound(request.user_id.clone()))?;

        let now = Utc::now();
        let skill = Skill {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            credits: request.credits,
            user_id: owner.id.clone(),
            user_email: owner.email.clone(),
            category,
            difficulty: request.difficulty,
            duration: request.duration,
            format: request.format,
            tags: clean_list(request.tags),
            requirements: vec![],
            created_at: now,
            updated_at: now,
            is_active: true,
            views: 0,
            swaps: 0,
            rating: self.default_skill_rating,
            reviews: vec![],
        };

        let mut skills = self.skills.write().await;
        skills.insert(0, skill.clone());

        tracing::info!("User {} listed skill {} ({})", skill.user_id, skill.id, skill.title);
        Ok(skill)
    }

    /// Spend a user's credits on another user's listing
    ///
    /// Returns the recorded transaction together with the updated buyer.
    pub async fn swap_skill(
        &self,
        user_id: &str,
        skill_id: &str,
    ) -> Result<(SwapTransaction, User), MarketplaceError> {
        let mut users = self.users.write().await;
        let mut skills = self.skills.write().await;

        let skill = skills
            .iter_mut()
            .find(|s| s.id == skill_id)
            .ok_or_else(|| MarketplaceError::SkillNotFound(skill_id.to_string()))?;

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| MarketplaceError::UserNotFound(user_id.to_string()))?;

        if user.credits < skill.credits {
            return Err(MarketplaceError::InsufficientCredits {
                required: skill.credits,
                available: user.credits,
            });
        }

        if skill.user_id == user.id {
            return Err(MarketplaceError::OwnSkill);
        }

        user.credits -= skill.credits;
        user.total_swaps += 1;
        skill.swaps += 1;
        skill.views += 1;

        let now = Utc::now();
        let transaction = SwapTransaction {
            id: Uuid::new_v4().to_string(),
            skill_id: skill.id.clone(),
            buyer_id: user.id.clone(),
            seller_id: skill.user_id.clone(),
            credits: skill.credits,
            status: SwapStatus::Completed,
            timestamp: now,
            completed_at: Some(now),
            rating: None,
            feedback: None,
        };

        self.transactions.write().await.push(transaction.clone());

        tracing::info!(
            "User {} swapped {} credits for skill {} (balance now {})",
            user.id,
            transaction.credits,
            skill.id,
            user.credits
        );

        Ok((transaction, user.clone()))
    }

    pub async fn user(&self, user_id: &str) -> Result<User, MarketplaceError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::UserNotFound(user_id.to_string()))
    }

    /// Snapshot of all users
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Snapshot of the whole catalog in display order
    pub async fn skills(&self) -> Vec<Skill> {
        self.skills.read().await.clone()
    }

    /// Snapshot of the swap history
    pub async fn transactions(&self) -> Vec<SwapTransaction> {
        self.transactions.read().await.clone()
    }
}

impl Default for MarketplaceStore {
    fn default() -> Self {
        Self::new("@university.edu", 10, 4.5)
    }
}

/// "jane.doe@university.edu" -> "Jane Doe"
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    local
        .split('.')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Trim entries and drop the empty ones
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
