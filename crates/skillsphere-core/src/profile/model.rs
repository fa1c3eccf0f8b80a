//! Profile domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skill::Skill;

/// A user's public professional record.
///
/// A user is meant to own at most one profile, but nothing below the
/// application layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Display name
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Ordered, unique by skill id
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Returns true if any attached skill has exactly this name, ignoring case.
    pub fn has_skill_named(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.skills.iter().any(|skill| skill.name.to_lowercase() == name)
    }

    /// Removes repeated skills by id, keeping the first occurrence.
    pub fn dedup_skills(skills: Vec<Skill>) -> Vec<Skill> {
        let mut unique: Vec<Skill> = Vec::with_capacity(skills.len());
        for skill in skills {
            if !unique.iter().any(|kept| kept.id == skill.id) {
                unique.push(skill);
            }
        }
        unique
    }
}
