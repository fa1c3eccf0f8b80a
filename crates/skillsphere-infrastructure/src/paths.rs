//! Path management for SkillSphere files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/skillsphere/       # Config directory (platform-specific)
//! ├── config.toml              # Application configuration
//! └── session.toml             # Persisted session entries
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for skillsphere_core::SphereError {
    fn from(err: PathError) -> Self {
        Self::config(err.to_string())
    }
}

const APP_DIR: &str = "skillsphere";

/// Resolves SkillSphere paths, optionally under a fixed base directory.
#[derive(Debug, Clone, Default)]
pub struct SpherePaths {
    base: Option<PathBuf>,
}

impl SpherePaths {
    /// Paths under the platform config directory (e.g. `~/.config/skillsphere`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths under `base` instead of the platform directory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Returns the configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.toml"))
    }
}
