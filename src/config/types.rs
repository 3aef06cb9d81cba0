//! Configuration types.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

use crate::error::{PayrollError, PayrollResult};

/// File the records are stored in when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "stafflist.txt";

/// Log level used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Application settings.
///
/// Every key is optional in the file:
///
/// ```yaml
/// data_file: /var/lib/payroll/stafflist.txt
/// log_level: info
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Path of the staff records file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Minimum level of log events written to stderr
    /// (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Parses [`AppConfig::log_level`].
    ///
    /// Level names are case-insensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_payroll::config::AppConfig;
    /// use tracing::Level;
    ///
    /// let mut config = AppConfig::default();
    /// assert_eq!(config.level().unwrap(), Level::WARN);
    ///
    /// config.log_level = "verbose".to_string();
    /// assert!(config.level().is_err());
    /// ```
    pub fn level(&self) -> PayrollResult<Level> {
        Level::from_str(self.log_level.trim()).map_err(|_| PayrollError::InvalidConfigValue {
            key: "log_level".to_string(),
            value: self.log_level.clone(),
            message: "expected error, warn, info, debug or trace".to_string(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}
