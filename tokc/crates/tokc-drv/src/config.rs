//! Configuration for the tokc driver.
//!
//! This module handles loading, saving, and locating the `tokc.toml`
//! configuration file.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use tokc_lex::OverflowPolicy;

use crate::error::{DriverError, Result};
use crate::report::ReportFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tokc.toml";

/// Usable characters per input line; one slot of a 100-byte line buffer
/// goes to the terminator.
pub const DEFAULT_LINE_CAPACITY: usize = 99;

/// Width of the dashed line printed between statements.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 57;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scanner settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Scanner configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Characters kept from each physical line; the rest is dropped.
    #[serde(default = "default_line_capacity")]
    pub line_capacity: usize,

    /// Handling of lexemes longer than the lexeme bound.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

/// Report configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Output layout.
    #[serde(default)]
    pub format: ReportFormat,

    /// Number of dashes in the statement separator.
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

fn default_line_capacity() -> usize {
    DEFAULT_LINE_CAPACITY
}

fn default_separator_width() -> usize {
    DEFAULT_SEPARATOR_WIDTH
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            line_capacity: DEFAULT_LINE_CAPACITY,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the scanner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.scan.line_capacity == 0 {
            return Err(DriverError::Config(
                "scan.line_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("tokc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tokc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
