//! Default skill catalog.
//!
//! Provides the system-defined skill list offered by the profile editor and
//! the search bar.

use super::model::Skill;

const CATALOG: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Rust",
    "Go",
    "Java",
    "C#",
    "SQL",
    "PostgreSQL",
    "Docker",
    "Kubernetes",
    "AWS",
    "GraphQL",
    "Machine Learning",
    "UI/UX Design",
    "DevOps",
];

/// Returns the fixed skill catalog, with ids "1".."N" in catalog order.
pub fn default_skill_catalog() -> Vec<Skill> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, name)| Skill::new((index + 1).to_string(), *name))
        .collect()
}

/// Returns the catalog entries not already in `selected`, ordered by id.
///
/// This is what a skill picker offers after some skills have been chosen.
pub fn available_skills(catalog: &[Skill], selected: &[Skill]) -> Vec<Skill> {
    let mut remaining: Vec<Skill> = catalog
        .iter()
        .filter(|skill| !selected.iter().any(|chosen| chosen.id == skill.id))
        .cloned()
        .collect();
    remaining.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    remaining
}
