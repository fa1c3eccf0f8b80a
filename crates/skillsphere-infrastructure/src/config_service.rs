//! Configuration loading.
//!
//! Reads `SphereConfig` from `config.toml`. A missing file means defaults;
//! a malformed one is an error rather than a silent fallback.

use skillsphere_core::SphereError;
use skillsphere_core::config::SphereConfig;
use skillsphere_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::SpherePaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    paths: SpherePaths,
}

impl ConfigService {
    /// Uses `<config_dir>/skillsphere/config.toml`.
    pub fn new() -> Result<Self> {
        let paths = SpherePaths::new();
        Ok(Self {
            path: paths.config_file()?,
            paths,
        })
    }

    /// Uses an explicit config file; the default session file sits next to it.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let paths = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => SpherePaths::with_base(parent),
            _ => SpherePaths::new(),
        };
        Self { path, paths }
    }

    /// Uses `config.toml` under `paths`, with the session file alongside it.
    pub fn with_paths(paths: SpherePaths) -> Result<Self> {
        Ok(Self {
            path: paths.config_file()?,
            paths,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, filling in the session file location.
    pub fn load(&self) -> Result<SphereConfig> {
        let mut config = if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            toml::from_str::<SphereConfig>(&content).map_err(|e| {
                SphereError::config(format!("Invalid {}: {}", self.path.display(), e))
            })?
        } else {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            SphereConfig::default()
        };

        if config.storage.session_file.is_none() {
            config.storage.session_file = Some(self.paths.session_file()?);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_paths(SpherePaths::with_base(temp_dir.path())).unwrap();

        let config = service.load().unwrap();

        assert_eq!(config.auth.min_password_length, 6);
        assert_eq!(
            config.storage.session_file,
            Some(temp_dir.path().join("session.toml"))
        );
    }

    #[test]
    fn test_reads_values_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[auth]\nmin_password_length = 10\n\n[storage]\nsession_file = \"/tmp/s.toml\"\nseed_demo_data = false\n",
        )
        .unwrap();

        let config = ConfigService::with_path(&path).load().unwrap();

        assert_eq!(config.auth.min_password_length, 10);
        assert!(!config.storage.seed_demo_data);
        assert_eq!(config.storage.session_file, Some(PathBuf::from("/tmp/s.toml")));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[auth\nmin_password_length = ").unwrap();

        let err = ConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, SphereError::Config(_)));
    }
}
