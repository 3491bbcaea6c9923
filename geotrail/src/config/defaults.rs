//! Default values for configuration settings.

use std::path::PathBuf;

use super::file::config_directory;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "geotrail.log";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted `[logging] level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Default log directory (~/.geotrail/logs).
pub fn default_log_directory() -> PathBuf {
    config_directory().join("logs")
}
