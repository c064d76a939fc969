//! Configuration management and validation.
//!
//! Resolves where the training log and profile files live. Defaults to the
//! platform data directory with per-path overrides from the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, PROFILE_FILE_NAME};
use crate::{Error, Result};

/// File locations for fitlog data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the default data files
    pub data_dir: PathBuf,

    /// Training log file path
    pub log_path: PathBuf,

    /// Profile file path
    pub profile_path: PathBuf,
}

impl Config {
    /// Create a configuration rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        let log_path = data_dir.join(LOG_FILE_NAME);
        let profile_path = data_dir.join(PROFILE_FILE_NAME);
        Self {
            data_dir,
            log_path,
            profile_path,
        }
    }

    /// Default data directory under the platform data dir
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| Error::configuration("Could not determine platform data directory"))
    }

    /// Resolve configuration from optional overrides.
    ///
    /// `data_dir` replaces the default root; `log_path`/`profile_path`
    /// override the individual files regardless of root.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        log_path: Option<PathBuf>,
        profile_path: Option<PathBuf>,
    ) -> Result<Self> {
        let root = match data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let mut config = Self::new(root);
        if let Some(path) = log_path {
            config.log_path = path;
        }
        if let Some(path) = profile_path {
            config.profile_path = path;
        }

        debug!(
            "Config resolved: log={}, profile={}",
            config.log_path.display(),
            config.profile_path.display()
        );
        Ok(config)
    }

    /// Override the log path
    pub fn with_log_path(mut self, path: PathBuf) -> Self {
        self.log_path = path;
        self
    }

    /// Override the profile path
    pub fn with_profile_path(mut self, path: PathBuf) -> Self {
        self.profile_path = path;
        self
    }

    /// Validate the configuration for consistency.
    ///
    /// Paths are allowed to not exist yet (first run creates them), but a
    /// path that exists and is a directory can never be used as a file.
    pub fn validate(&self) -> Result<()> {
        Self::ensure_not_directory(&self.log_path, "log")?;
        Self::ensure_not_directory(&self.profile_path, "profile")?;
        Ok(())
    }

    fn ensure_not_directory(path: &Path, label: &str) -> Result<()> {
        if path.is_dir() {
            return Err(Error::configuration(format!(
                "The {} path is a directory: {}",
                label,
                path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_derive_from_data_dir() {
        let config = Config::new(PathBuf::from("/tmp/fitlog-test"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/fitlog-test/training_log.csv"));
        assert_eq!(config.profile_path, PathBuf::from("/tmp/fitlog-test/profile.json"));
    }

    #[test]
    fn test_resolve_with_overrides() {
        let config = Config::resolve(
            Some(PathBuf::from("/tmp/fitlog-test")),
            Some(PathBuf::from("/tmp/elsewhere/log.csv")),
            None,
        )
        .unwrap();
        assert_eq!(config.log_path, PathBuf::from("/tmp/elsewhere/log.csv"));
        assert_eq!(config.profile_path, PathBuf::from("/tmp/fitlog-test/profile.json"));
    }

    #[test]
    fn test_validate_rejects_directory_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("data"))
            .with_log_path(temp_dir.path().to_path_buf());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_missing_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("does-not-exist-yet"));
        assert!(config.validate().is_ok());
    }
}
