//! Configuration key access for `config get` and `config set`.
//!
//! Only scalar settings are addressable by key. Regions are edited as
//! `[region.<key>]` sections in the file itself.

use std::str::FromStr;
use thiserror::Error;

use super::defaults::LOG_LEVELS;
use super::parser::{expand_tilde, parse_log_level, parse_sample_size};
use super::settings::ConfigFile;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ValidationSampleSize,
    LegacyE7Scaling,
    LoggingDirectory,
    LoggingFile,
    LoggingLevel,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Full key name in `section.key` form.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ValidationSampleSize => "validation.sample_size",
            ConfigKey::LegacyE7Scaling => "legacy.e7_scaling",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
            ConfigKey::LoggingLevel => "logging.level",
        }
    }

    /// Section part of the key name.
    pub fn section(&self) -> &'static str {
        self.name().split_once('.').map(|(s, _)| s).unwrap_or("")
    }

    /// Key part of the key name.
    pub fn key_name(&self) -> &'static str {
        self.name().split_once('.').map(|(_, k)| k).unwrap_or("")
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ValidationSampleSize => config.validation.sample_size.to_string(),
            ConfigKey::LegacyE7Scaling => config.legacy.e7_scaling.as_str().to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
        }
    }

    /// Validate and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let failed = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::ValidationSampleSize => {
                config.validation.sample_size =
                    parse_sample_size(value).map_err(|_| failed("must be a positive integer".into()))?;
            }
            ConfigKey::LegacyE7Scaling => {
                config.legacy.e7_scaling = value
                    .parse()
                    .map_err(|_| failed("must be one of: scaled, raw".into()))?;
            }
            ConfigKey::LoggingDirectory => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(failed("must not be empty".into()));
                }
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(failed("must not be empty".into()));
                }
                config.logging.file = value.to_string();
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = parse_log_level(value)
                    .map_err(|_| failed(format!("must be one of: {}", LOG_LEVELS.join(", "))))?;
            }
        }
        Ok(())
    }

    /// All keys, in listing order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ValidationSampleSize,
            ConfigKey::LegacyE7Scaling,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
            ConfigKey::LoggingLevel,
        ]
    }
}
