use crate::models::SkillCategory;

/// (id, display name, icon, color)
const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("programming", "Programming & Tech", "Code", "blue"),
    ("design", "Design & Creative", "Palette", "purple"),
    ("business", "Business & Marketing", "TrendingUp", "green"),
    ("languages", "Languages", "Globe", "orange"),
    ("academic", "Academic Subjects", "BookOpen", "indigo"),
    ("music", "Music & Arts", "Music", "pink"),
    ("fitness", "Health & Fitness", "Heart", "red"),
    ("other", "Other Skills", "Star", "gray"),
];

/// All categories a listing can be filed under, in display order
pub fn skill_categories() -> Vec<SkillCategory> {
    CATEGORIES
        .iter()
        .map(|(id, name, icon, color)| SkillCategory {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Look up a category by id
pub fn find_category(id: &str) -> Option<SkillCategory> {
    skill_categories().into_iter().find(|c| c.id == id)
}
