use crate::models::Skill;

/// Filter value that disables the category or difficulty constraint
pub const ALL: &str = "all";

pub const CATALOG_RATING_WEIGHT: f64 = 0.6;
pub const CATALOG_SWAPS_WEIGHT: f64 = 0.4;
/// Swap counts are divided by this before blending so rating stays dominant
pub const SWAPS_DAMPENING: f64 = 10.0;

/// Narrow the catalog to what the browse view should show, best first
///
/// # Arguments
/// * `search_term` - Case-insensitive substring of title, description or a tag;
///   empty matches everything
/// * `category_id` - Category id to keep, or `"all"`
/// * `difficulty` - Difficulty name to keep, or `"all"`
///
/// Nothing is cut off; matching skills are only reordered by
/// [`catalog_score`]. Equal scores keep catalog order.
pub fn filter_and_sort(
    skills: &[Skill],
    search_term: &str,
    category_id: &str,
    difficulty: &str,
) -> Vec<Skill> {
    let needle = search_term.to_lowercase();

    let mut visible: Vec<Skill> = skills
        .iter()
        .filter(|skill| matches_search(skill, &needle))
        .filter(|skill| category_id == ALL || skill.category.id == category_id)
        .filter(|skill| difficulty == ALL || skill.difficulty.as_str() == difficulty)
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        catalog_score(b)
            .partial_cmp(&catalog_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    visible
}

/// Browse ranking blending rating with dampened popularity
#[inline]
pub fn catalog_score(skill: &Skill) -> f64 {
    skill.rating * CATALOG_RATING_WEIGHT
        + (skill.swaps as f64 / SWAPS_DAMPENING) * CATALOG_SWAPS_WEIGHT
}

/// `needle` must already be lowercased
#[inline]
fn matches_search(skill: &Skill, needle: &str) -> bool {
    skill.title.to_lowercase().contains(needle)
        || skill.description.to_lowercase().contains(needle)
        || skill.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
