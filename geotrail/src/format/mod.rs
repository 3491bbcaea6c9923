//! Declared export formats.
//!
//! The format of a document is always chosen by the user. Content is never
//! sniffed to pick a format: a document validated under the wrong tag is
//! rejected, not reinterpreted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location-history export schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    /// iPhone export: top-level array of `{"activity": {"start", "end"}}` records
    /// holding `geo:` URIs.
    #[serde(rename = "ios")]
    Ios,
    /// Android timeline export: `{"semanticSegments": [...]}` holding degree pairs.
    #[serde(rename = "android-semantic")]
    AndroidSemantic,
    /// Legacy Android Timeline.json: `{"timelineObjects": [...]}` holding
    /// `latitudeE7`/`longitudeE7` integers.
    #[serde(rename = "android")]
    AndroidLegacy,
}

impl FormatTag {
    /// All recognized tags, in selector order.
    pub const ALL: [FormatTag; 3] = [
        FormatTag::Ios,
        FormatTag::AndroidLegacy,
        FormatTag::AndroidSemantic,
    ];

    /// The tag string used in selectors, config and tagged documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Ios => "ios",
            FormatTag::AndroidSemantic => "android-semantic",
            FormatTag::AndroidLegacy => "android",
        }
    }

    /// Short label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            FormatTag::Ios => "ios",
            FormatTag::AndroidSemantic => "Android",
            FormatTag::AndroidLegacy => "Android timelineObjects",
        }
    }

    /// Vendor name used in rejection messages.
    pub fn vendor_name(&self) -> &'static str {
        match self {
            FormatTag::Ios => "iOS",
            FormatTag::AndroidSemantic => "Android",
            FormatTag::AndroidLegacy => "Android timelineObjects",
        }
    }

    /// What a coordinate field looks like in this format.
    pub fn coordinate_hint(&self) -> &'static str {
        match self {
            FormatTag::Ios => "'geo:latitude,longitude'",
            FormatTag::AndroidSemantic => "'latitude°, longitude°'",
            FormatTag::AndroidLegacy => "latitudeE7/longitudeE7 fields",
        }
    }

    /// Name of the records counted in status messages.
    pub fn record_unit(&self) -> &'static str {
        match self {
            FormatTag::Ios => "items",
            FormatTag::AndroidSemantic => "segments",
            FormatTag::AndroidLegacy => "timeline objects",
        }
    }

    /// Top-level field holding the record array, or `None` when the
    /// document itself is the array.
    pub fn records_field(&self) -> Option<&'static str> {
        match self {
            FormatTag::Ios => None,
            FormatTag::AndroidSemantic => Some("semanticSegments"),
            FormatTag::AndroidLegacy => Some("timelineObjects"),
        }
    }

    /// Human-readable description shown in selectors.
    pub fn description(&self) -> &'static str {
        match self {
            FormatTag::Ios => "iPhone/iOS Format (location-history.json)",
            FormatTag::AndroidLegacy => "Android Format (Timeline.json - old)",
            FormatTag::AndroidSemantic => "Android Format (semanticSegments - new)",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format '{0}' (expected one of: ios, android-semantic, android)")]
pub struct FormatParseError(pub String);

impl FromStr for FormatTag {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(FormatTag::Ios),
            "android-semantic" => Ok(FormatTag::AndroidSemantic),
            "android" => Ok(FormatTag::AndroidLegacy),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

/// How legacy `latitudeE7`/`longitudeE7` integers become degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum E7Scaling {
    /// Divide by 10^7 to recover decimal degrees.
    #[default]
    Scaled,
    /// Use the integers unchanged, and skip zero-valued fields. Reproduces
    /// exports processed by tools that never applied the scale factor; the
    /// resulting points fall outside every bounded region.
    Raw,
}

impl E7Scaling {
    /// Config file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            E7Scaling::Scaled => "scaled",
            E7Scaling::Raw => "raw",
        }
    }
}

impl FromStr for E7Scaling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scaled" => Ok(E7Scaling::Scaled),
            "raw" => Ok(E7Scaling::Raw),
            _ => Err(format!("unknown e7 scaling '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("ios".parse::<FormatTag>(), Ok(FormatTag::Ios));
        assert_eq!(
            "android-semantic".parse::<FormatTag>(),
            Ok(FormatTag::AndroidSemantic)
        );
        assert_eq!("android".parse::<FormatTag>(), Ok(FormatTag::AndroidLegacy));
    }

    #[test]
    fn test_parse_is_exact() {
        for s in ["IOS", "ios ", " android", "Android-Semantic"] {
            assert_eq!(s.parse::<FormatTag>(), Err(FormatParseError(s.to_string())));
            assert!(serde_json::from_value::<FormatTag>(serde_json::json!(s)).is_err());
        }
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "kml".parse::<FormatTag>().unwrap_err();
        assert_eq!(err, FormatParseError("kml".to_string()));
        assert!(err.to_string().contains("android-semantic"));
    }

    #[test]
    fn test_display_matches_parse() {
        for tag in FormatTag::ALL {
            assert_eq!(tag.to_string().parse::<FormatTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FormatTag::AndroidSemantic).unwrap();
        assert_eq!(json, "\"android-semantic\"");
        let tag: FormatTag = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(tag, FormatTag::AndroidLegacy);
    }

    #[test]
    fn test_records_field() {
        assert_eq!(FormatTag::Ios.records_field(), None);
        assert_eq!(
            FormatTag::AndroidSemantic.records_field(),
            Some("semanticSegments")
        );
        assert_eq!(
            FormatTag::AndroidLegacy.records_field(),
            Some("timelineObjects")
        );
    }

    #[test]
    fn test_e7_scaling_parse() {
        assert_eq!("scaled".parse::<E7Scaling>(), Ok(E7Scaling::Scaled));
        assert_eq!(" RAW ".parse::<E7Scaling>(), Ok(E7Scaling::Raw));
        assert!("halved".parse::<E7Scaling>().is_err());
        assert_eq!(E7Scaling::default(), E7Scaling::Scaled);
    }
}
