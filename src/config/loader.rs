//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading an
//! [`AppConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::AppConfig;

/// Loads the application configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`AppConfig`], or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    /// - `log_level` is not a known level (`InvalidConfigValue`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staff_payroll::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("./payroll.yaml")?;
    /// # Ok::<(), staff_payroll::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<AppConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;
        config.level()?;
        Ok(config)
    }

    /// Loads configuration from `path` if one is given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<AppConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(AppConfig::default()),
        }
    }
}
