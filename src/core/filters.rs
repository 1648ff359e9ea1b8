use crate::models::{Skill, User};

/// Check whether a skill may be offered to a user at all
///
/// A skill is eligible when it belongs to someone else, is still listed,
/// and fits within the user's current credit balance.
#[inline]
pub fn is_eligible(skill: &Skill, user: &User) -> bool {
    // Never match a user to their own listing
    if skill.user_id == user.id {
        return false;
    }

    if !skill.is_active {
        return false;
    }

    user.credits >= skill.credits
}

/// Loose interest/tag test: either string contains the other, ignoring case
///
/// Both arguments are expected to be lowercased already.
#[inline]
pub fn terms_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Tags of the skill that overlap any of the user's interests
pub fn matching_tags<'a>(user: &User, skill: &'a Skill) -> Vec<&'a str> {
    let interests: Vec<String> = user.interests.iter().map(|i| i.to_lowercase()).collect();

    skill
        .tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            interests.iter().any(|interest| terms_overlap(interest, &tag))
        })
        .map(String::as_str)
        .collect()
}

/// Interests of the user that overlap any of the skill's tags
pub fn matching_interests<'a>(user: &'a User, skill: &Skill) -> Vec<&'a str> {
    let tags: Vec<String> = skill.tags.iter().map(|t| t.to_lowercase()).collect();

    user.interests
        .iter()
        .filter(|interest| {
            let interest = interest.to_lowercase();
            tags.iter().any(|tag| terms_overlap(tag, &interest))
        })
        .map(String::as_str)
        .collect()
}
