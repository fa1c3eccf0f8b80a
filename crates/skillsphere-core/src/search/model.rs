//! Search domain models.

use serde::{Deserialize, Serialize};

/// Criteria for narrowing the profile list.
///
/// An absent or empty criterion does not filter anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFilters {
    /// Skill name, matched exactly (ignoring case)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,

    /// Substring of the profile location (ignoring case)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Substring of name, title, bio or any skill name (ignoring case)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ProfileFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Returns true if no criterion would filter anything.
    pub fn is_empty(&self) -> bool {
        self.active_skill().is_none()
            && self.active_location().is_none()
            && self.active_search().is_none()
    }

    pub(crate) fn active_skill(&self) -> Option<&str> {
        active(&self.skill)
    }

    pub(crate) fn active_location(&self) -> Option<&str> {
        active(&self.location)
    }

    pub(crate) fn active_search(&self) -> Option<&str> {
        active(&self.search)
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}
