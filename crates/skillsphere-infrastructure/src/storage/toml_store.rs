//! File-backed key-value store.
//!
//! File format: a single `[entries]` table of string values.

use serde::{Deserialize, Serialize};
use skillsphere_core::error::Result;
use skillsphere_core::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::atomic_toml::AtomicTomlFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredEntries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Key-value store persisted to a TOML file.
///
/// Multi-key writes are a single locked transaction, so the session pair is
/// never left half-written. Reads of a malformed file fail; writes replace it.
pub struct TomlKeyValueStore {
    file: AtomicTomlFile<StoredEntries>,
}

impl TomlKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let stored = self.file.load()?.unwrap_or_default();
        Ok(stored.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.set_many(vec![(key, value)])
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_many(&[key])
    }

    fn set_many(&self, entries: Vec<(&str, String)>) -> Result<()> {
        self.file.update(StoredEntries::default(), |stored| {
            for (key, value) in entries {
                stored.entries.insert(key.to_string(), value);
            }
            Ok(())
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(StoredEntries::default(), |stored| {
            for key in keys {
                stored.entries.remove(*key);
            }
            Ok(())
        })
    }
}
