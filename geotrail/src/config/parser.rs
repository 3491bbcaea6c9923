//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;

use super::defaults::LOG_LEVELS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::region::{Region, WORLD_KEY};

/// Prefix of region section names, e.g. `[region.nyc]`.
pub const REGION_SECTION_PREFIX: &str = "region.";

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [validation] section
    if let Some(section) = ini.section(Some("validation")) {
        if let Some(v) = section.get("sample_size") {
            config.validation.sample_size = parse_sample_size(v)?;
        }
    }

    // [legacy] section
    if let Some(section) = ini.section(Some("legacy")) {
        if let Some(v) = section.get("e7_scaling") {
            config.legacy.e7_scaling = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "legacy".to_string(),
                key: "e7_scaling".to_string(),
                value: v.to_string(),
                reason: "must be one of: scaled, raw".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("level") {
            config.logging.level = parse_log_level(v)?;
        }
    }

    // [region.<key>] sections
    for (name, section) in ini.iter() {
        let Some(key) = name.and_then(|n| n.strip_prefix(REGION_SECTION_PREFIX)) else {
            continue;
        };
        config.regions.push(parse_region(key.trim(), section)?);
    }

    Ok(config)
}

pub(super) fn parse_sample_size(v: &str) -> Result<usize, ConfigFileError> {
    match v.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: "validation".to_string(),
            key: "sample_size".to_string(),
            value: v.to_string(),
            reason: "must be a positive integer".to_string(),
        }),
    }
}

pub(super) fn parse_log_level(v: &str) -> Result<String, ConfigFileError> {
    let level = v.trim().to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigFileError::InvalidValue {
            section: "logging".to_string(),
            key: "level".to_string(),
            value: v.to_string(),
            reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
        })
    }
}

/// Parse one `[region.<key>]` section.
fn parse_region(key: &str, section: &Properties) -> Result<Region, ConfigFileError> {
    let section_name = format!("{}{}", REGION_SECTION_PREFIX, key);
    let invalid = |field: &str, value: &str, reason: &str| ConfigFileError::InvalidValue {
        section: section_name.clone(),
        key: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("", "", "region key must not be empty"));
    }
    if key == WORLD_KEY {
        return Err(invalid("", key, "the world region cannot be redefined"));
    }

    let required = |field: &str| -> Result<f64, ConfigFileError> {
        let v = section
            .get(field)
            .ok_or_else(|| invalid(field, "", "missing required value"))?;
        parse_degrees(v).ok_or_else(|| invalid(field, v, "must be a finite number"))
    };
    let optional = |field: &str| -> Result<Option<f64>, ConfigFileError> {
        section
            .get(field)
            .map(|v| parse_degrees(v).ok_or_else(|| invalid(field, v, "must be a finite number")))
            .transpose()
    };

    let display_name = section
        .get("name")
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(key);
    let lat_min = required("lat_min")?;
    let lat_max = required("lat_max")?;
    let lng_min = required("lng_min")?;
    let lng_max = required("lng_max")?;

    if lat_min > lat_max {
        return Err(invalid(
            "lat_min",
            &lat_min.to_string(),
            "must not be greater than lat_max",
        ));
    }
    if lng_min > lng_max {
        return Err(invalid(
            "lng_min",
            &lng_min.to_string(),
            "must not be greater than lng_max",
        ));
    }

    let region = Region::new(key, display_name, lat_min, lat_max, lng_min, lng_max);
    let center_lat = optional("center_lat")?.unwrap_or(region.center.lat);
    let center_lng = optional("center_lng")?.unwrap_or(region.center.lng);
    let zoom = match optional("zoom")? {
        Some(z) if z <= 0.0 => {
            return Err(invalid("zoom", &z.to_string(), "must be a positive number"));
        }
        Some(z) => z,
        None => region.zoom,
    };

    Ok(region.with_view(center_lat, center_lng, zoom))
}

fn parse_degrees(v: &str) -> Option<f64> {
    v.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
