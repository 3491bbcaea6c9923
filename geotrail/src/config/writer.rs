//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::parser::REGION_SECTION_PREFIX;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mut out = format!(
        r#"[validation]
; Number of records inspected before a file is accepted
sample_size = {}

[legacy]
; How latitudeE7/longitudeE7 integers in Timeline.json become degrees:
;   scaled - divide by 10^7 (decimal degrees)
;   raw    - use the integers unchanged and skip zero fields
e7_scaling = {}

[logging]
directory = {}
file = {}
; One of: trace, debug, info, warn, error (RUST_LOG takes precedence)
level = {}
"#,
        config.validation.sample_size,
        config.legacy.e7_scaling.as_str(),
        escape_value(&path_to_string(&config.logging.directory)),
        escape_value(&config.logging.file),
        config.logging.level,
    );

    for region in &config.regions {
        out.push_str(&format!(
            r#"
[{}{}]
name = {}
lat_min = {}
lat_max = {}
lng_min = {}
lng_max = {}
center_lat = {}
center_lng = {}
zoom = {}
"#,
            REGION_SECTION_PREFIX,
            region.key,
            escape_value(&region.display_name),
            region.bounds.lat_min,
            region.bounds.lat_max,
            region.bounds.lng_min,
            region.bounds.lng_max,
            region.center.lat,
            region.center.lng,
            region.zoom,
        ));
    }

    out
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Escape a value so `Ini::load_from_file` reads it back unchanged.
///
/// The reader drops a `\` before any other character and unquotes values
/// that start with a quote.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ';' | '#' | '=' | ':' | '"' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
