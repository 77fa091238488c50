//! Application configuration module for mailquote
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::path_resolver;
use crate::error::{parse_keep_lines, parse_max_length, StripError};
use crate::strip::{QuoteStripper, DEFAULT_KEEP_QUOTE_LINES};

/// Environment variable holding the per-block keep-count
pub const KEEP_QUOTE_LINES_ENV: &str = "MAIL_KEEP_QUOTE_LINES";

/// Environment variable holding the hard length cap
pub const MAX_LENGTH_ENV: &str = "MAIL_MAX_LENGTH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Lines kept from the start of each quote block (default: 10)
    #[serde(default = "default_keep_quote_lines")]
    keep_quote_lines: usize,

    /// Maximum output length in characters, 0 for unlimited (default: 0)
    #[serde(default)]
    max_length: usize,
}

fn default_keep_quote_lines() -> usize {
    DEFAULT_KEEP_QUOTE_LINES
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keep_quote_lines: default_keep_quote_lines(),
            max_length: 0,
        }
    }
}

/// Resolve the keep-count from `MAIL_KEEP_QUOTE_LINES`
///
/// Unset means the default of 10. A set value must be a positive integer.
pub fn keep_lines_from_env() -> Result<usize, StripError> {
    match std::env::var(KEEP_QUOTE_LINES_ENV) {
        Ok(value) => parse_keep_lines(&value),
        Err(_) => Ok(DEFAULT_KEEP_QUOTE_LINES),
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Overwrite fields whose environment variable is set to a valid value
    ///
    /// Unset variables leave the field alone, so a value equal to the default
    /// still wins over a config file.
    pub fn apply_env(mut self) -> Self {
        if let Ok(value) = std::env::var(KEEP_QUOTE_LINES_ENV) {
            match parse_keep_lines(&value) {
                Ok(n) => self.keep_quote_lines = n,
                Err(e) => tracing::warn!("Ignoring {}: {}", KEEP_QUOTE_LINES_ENV, e),
            }
        }

        if let Ok(value) = std::env::var(MAX_LENGTH_ENV) {
            match parse_max_length(&value) {
                Ok(n) => self.max_length = n,
                Err(e) => tracing::warn!("Ignoring {}: {}", MAX_LENGTH_ENV, e),
            }
        }

        self
    }

    /// Load defaults, then the user config file if present, then the environment
    pub fn load() -> Result<Self> {
        let config_path = path_resolver::get_config_dir().join("config.toml");

        let file_config = if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        Ok(file_config.apply_env())
    }

    /// Override keep_quote_lines
    pub fn with_keep_quote_lines(mut self, n: usize) -> Self {
        self.keep_quote_lines = n;
        self
    }

    /// Override max_length
    pub fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = n;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.keep_quote_lines == 0 {
            return Err(StripError::InvalidKeepLines {
                value: self.keep_quote_lines.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Build a stripper from this configuration
    pub fn stripper(&self) -> QuoteStripper {
        QuoteStripper::new(self.keep_quote_lines)
    }

    // Getters
    pub fn keep_quote_lines(&self) -> usize {
        self.keep_quote_lines
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
