use serde::{Deserialize, Serialize};

/// A named tag from the skill catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Catalog ids are decimal strings; this is their sort key.
    ///
    /// Non-numeric ids sort after every numeric one.
    pub(crate) fn sort_key(&self) -> (u64, &str) {
        (self.id.parse().unwrap_or(u64::MAX), self.id.as_str())
    }
}
