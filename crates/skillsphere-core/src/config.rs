//! Configuration models.
//!
//! Every section has defaults, so an empty or partial `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::auth::DEFAULT_MIN_PASSWORD_LENGTH;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SphereConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub profiles: ProfileSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Artificial delays applied by the in-memory repositories, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Single-record reads and the skill catalog
    #[serde(default)]
    pub read_ms: u64,
    /// Full listings and searches
    #[serde(default)]
    pub list_ms: u64,
    /// Profile create/update
    #[serde(default)]
    pub write_ms: u64,
    /// Register/login
    #[serde(default)]
    pub auth_ms: u64,
}

impl LatencyConfig {
    /// No delays at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays resembling a slow network round trip.
    pub fn simulated_network() -> Self {
        Self {
            read_ms: 300,
            list_ms: 500,
            write_ms: 800,
            auth_ms: 800,
        }
    }

    pub fn read(&self) -> Duration {
        Duration::from_millis(self.read_ms)
    }

    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn write(&self) -> Duration {
        Duration::from_millis(self.write_ms)
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    /// Reject creating a second profile for the same user
    #[serde(default)]
    pub single_profile_per_user: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Session file location; the platform config directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
    /// Load the demo users and profiles at startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            session_file: None,
            seed_demo_data: true,
        }
    }
}

fn default_true() -> bool {
    true
}
