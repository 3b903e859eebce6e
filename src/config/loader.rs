//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading work-time
//! rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyMetadata, ThresholdsConfig, WorkTimeRules};

/// Loads and provides access to the work-time rules configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the resulting [`WorkTimeRules`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/worktime/
/// ├── policy.yaml      # Policy metadata and timezone
/// └── thresholds.yaml  # Bucket thresholds, lunch window, violation caps
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/worktime").unwrap();
/// let rules = loader.rules();
/// println!("Policy: {}", rules.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: WorkTimeRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/worktime")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The configured timezone offset is out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worktime_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/worktime")?;
    /// # Ok::<(), worktime_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let thresholds_path = path.join("thresholds.yaml");
        let thresholds = Self::load_yaml::<ThresholdsConfig>(&thresholds_path)?;

        let rules = WorkTimeRules::new(metadata, thresholds).ok_or_else(|| {
            EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "utc_offset_minutes is out of range".to_string(),
            }
        })?;

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded work-time rules.
    pub fn rules(&self) -> &WorkTimeRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_from_repository_config() {
        let loader = ConfigLoader::load("./config/worktime").unwrap();
        let rules = loader.rules();

        assert_eq!(
            rules.thresholds().work_time.weekday_regular_hours,
            Decimal::from(8)
        );
        assert_eq!(
            rules.thresholds().violations.weekly_hours_cap,
            Decimal::from(40)
        );
    }

    #[test]
    fn test_load_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
