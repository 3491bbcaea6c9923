//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file. Parsing
//! lives in [`super::parser`] and serialization in [`super::writer`].

use std::path::PathBuf;

use crate::format::E7Scaling;
use crate::pipeline::PipelineConfig;
use crate::region::{Region, RegionError, RegionTable};
use crate::validate::DEFAULT_SAMPLE_SIZE;

use super::defaults::{default_log_directory, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Validation settings
    pub validation: ValidationSettings,
    /// Legacy Timeline.json settings
    pub legacy: LegacySettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// `[region.<key>]` sections, in file order
    pub regions: Vec<Region>,
}

/// Validation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    /// Records inspected before full extraction
    pub sample_size: usize,
}

/// Legacy format configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacySettings {
    /// How `latitudeE7`/`longitudeE7` integers are converted
    pub e7_scaling: E7Scaling,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory holding the log file
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: DEFAULT_LOG_FILE.to_string(),
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            validation: ValidationSettings::default(),
            legacy: LegacySettings::default(),
            logging: LoggingSettings::default(),
            regions: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Pipeline settings derived from this configuration.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            sample_size: self.validation.sample_size,
            e7_scaling: self.legacy.e7_scaling,
        }
    }

    /// The built-in region table with configured regions added or replaced.
    pub fn region_table(&self) -> Result<RegionTable, RegionError> {
        let mut table = RegionTable::builtin();
        for region in &self.regions {
            table.insert(region.clone())?;
        }
        Ok(table)
    }
}
