//! Configuration module
//!
//! Handles loading and saving runner configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{DEFAULT_FULL_NAME_SEPARATOR, TYPE_FULL_NAME_SEPARATOR};

/// Runner configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Separator placed before the names of ordinary groups and tests
    pub full_name_separator: String,

    /// Separator placed before names produced from types and methods
    pub type_full_name_separator: String,

    /// Full names of tests that should not be invoked
    pub skip: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            full_name_separator: DEFAULT_FULL_NAME_SEPARATOR.to_string(),
            type_full_name_separator: TYPE_FULL_NAME_SEPARATOR.to_string(),
            skip: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Self = if is_yaml(path.as_ref()) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if is_yaml(path.as_ref()) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    pub fn with_skip(mut self, full_name: impl Into<String>) -> Self {
        self.skip.push(full_name.into());
        self
    }

    pub fn should_skip(&self, full_name: &str) -> bool {
        self.skip.iter().any(|s| s == full_name)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
