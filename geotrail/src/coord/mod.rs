//! Coordinate parsing module
//!
//! Location-history exports encode positions as text. Two encodings are
//! recognized:
//!
//! - iOS: `geo:<lat>,<lng>` URIs, e.g. `geo:40.7128,-74.0060`
//! - Android semantic timeline: degree pairs, e.g. `13.7859183°, 100.5993268°`
//!
//! Both parsers are total: they return `None` instead of failing.

mod types;

pub use types::{Coordinate, GeoBounds, E7_SCALE, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Get the `geo:` URI pattern.
///
/// Pattern: `geo:<lat>,<lng>` where each field is `-?\d+(\.\d+)?`.
/// Whitespace is not tolerated anywhere.
fn geo_uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // (-?\d+(?:\.\d+)?) - signed decimal, no exponent
        Regex::new(r"^geo:(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)$")
            .expect("geo URI pattern is a valid regex")
    })
}

/// Parse a `geo:<lat>,<lng>` string.
///
/// # Examples
///
/// ```
/// use geotrail::coord::parse_geo_uri;
///
/// let point = parse_geo_uri("geo:40.7128,-74.0060").unwrap();
/// assert_eq!(point.lat, 40.7128);
/// assert_eq!(point.lng, -74.0060);
///
/// assert!(parse_geo_uri("geo: 40.7128,-74.0060").is_none());
/// assert!(parse_geo_uri("40.7128,-74.0060").is_none());
/// ```
pub fn parse_geo_uri(s: &str) -> Option<Coordinate> {
    let captures = geo_uri_pattern().captures(s)?;
    let lat = parse_finite(captures.get(1)?.as_str())?;
    let lng = parse_finite(captures.get(2)?.as_str())?;
    Some(Coordinate::new(lat, lng))
}

/// Parse a degree pair such as `"40.7128°, -74.0060°"`.
///
/// All degree signs are removed, the string is trimmed and split on the
/// comma into exactly two fields, and each trimmed field must be a finite
/// decimal number.
///
/// # Examples
///
/// ```
/// use geotrail::coord::parse_degree_pair;
///
/// let point = parse_degree_pair("13.7859183°, 100.5993268°").unwrap();
/// assert_eq!(point.lat, 13.7859183);
/// assert_eq!(point.lng, 100.5993268);
///
/// assert!(parse_degree_pair("not,numbers").is_none());
/// ```
pub fn parse_degree_pair(s: &str) -> Option<Coordinate> {
    let cleaned = s.replace('°', "");
    let mut parts = cleaned.trim().split(',');

    let lat = parse_finite(parts.next()?.trim())?;
    let lng = parse_finite(parts.next()?.trim())?;
    if parts.next().is_some() {
        return None;
    }

    Some(Coordinate::new(lat, lng))
}

/// Parse a JSON value holding a `geo:` URI. Non-strings yield `None`.
pub fn parse_geo_value(value: &Value) -> Option<Coordinate> {
    value.as_str().and_then(parse_geo_uri)
}

/// Parse a JSON value holding a degree pair. Non-strings yield `None`.
pub fn parse_degree_value(value: &Value) -> Option<Coordinate> {
    value.as_str().and_then(parse_degree_pair)
}

fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
