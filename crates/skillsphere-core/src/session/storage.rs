//! Key-value store backing the session.

use crate::error::Result;

/// A small persisted string map (the browser `localStorage` analogue).
///
/// Implementations that can write several entries atomically should override
/// [`KeyValueStore::set_many`] and [`KeyValueStore::remove_many`]; the
/// defaults apply entries one at a time.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    fn set_many(&self, entries: Vec<(&str, String)>) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
