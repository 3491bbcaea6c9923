//! User configuration.
//!
//! Settings are read from `~/.geotrail/config.ini`:
//!
//! ```ini
//! [validation]
//! sample_size = 10
//!
//! [legacy]
//! e7_scaling = scaled
//!
//! [logging]
//! level = info
//!
//! [region.bologna]
//! name = Bologna
//! lat_min = 44.45
//! lat_max = 44.55
//! lng_min = 11.3
//! lng_max = 11.4
//! ```
//!
//! `[region.<key>]` sections add regions to the built-in table or replace
//! built-in entries with the same key.

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_log_directory, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, LOG_LEVELS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use parser::REGION_SECTION_PREFIX;
pub use settings::{ConfigFile, LegacySettings, LoggingSettings, ValidationSettings};
