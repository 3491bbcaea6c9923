//! Sample-based validation of a document against its declared format.
//!
//! Validation runs before full extraction and only looks at a bounded prefix
//! of the record array, so that very large exports get a verdict quickly.
//! The sample is scanned with the same record walkers extraction uses.
//!
//! ```text
//! Start ─► StructuralCheck ─► EmptyCheck ─► SampleScan ─► Accepted
//!               │                 │              │
//!               ▼                 ▼              ▼
//!           Rejected          Rejected       Rejected
//! ```
//!
//! A file whose first `sample_size` records hold no coordinates is rejected
//! even when later records would yield points.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::extract::{self, Extractor};
use crate::format::{E7Scaling, FormatTag};

/// Number of records inspected when no sample size is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Why a document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Top-level shape does not match the declared format.
    #[error("the data is not in the {} format ({found})", vendor_name(.format))]
    StructuralMismatch {
        /// Declared format
        format: FormatTag,
        /// Description of what the document holds instead
        found: String,
    },

    /// The record array exists but holds no elements.
    #[error(
        "your file is empty - looks like you have your location history off or have the history auto-delete on"
    )]
    EmptyInput,

    /// iOS sample contains no `activity` objects at all.
    #[error("no 'activity' objects found. expected ios structure")]
    MissingActivityRecords,

    /// Shape matched but no coordinate field in the sample parsed.
    #[error(
        "no valid gps coordinates found in {} format. expected {}",
        vendor_name(.format),
        coordinate_hint(.format)
    )]
    NoCoordinatesFound {
        /// Declared format
        format: FormatTag,
    },
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Declared format the document was checked against
    pub format: FormatTag,
    /// Whether full extraction should proceed
    pub accepted: bool,
    /// Status text shown to the user verbatim
    pub message: String,
    /// Coordinates parsed in the sample
    pub sample_match_count: usize,
    /// Records actually scanned
    pub sample_size: usize,
    /// Length of the record array, or 0 when no array was found
    pub total_records: usize,
    /// Coordinate fields in the sample that failed to parse
    pub unparseable_fields: usize,
    /// Rejection reason when not accepted
    pub rejection: Option<ValidationError>,
}

impl ValidationReport {
    fn rejected(format: FormatTag, error: ValidationError) -> Self {
        Self {
            format,
            accepted: false,
            message: error.to_string(),
            sample_match_count: 0,
            sample_size: 0,
            total_records: 0,
            unparseable_fields: 0,
            rejection: Some(error),
        }
    }

    fn with_counts(mut self, sample_size: usize, total_records: usize) -> Self {
        self.sample_size = sample_size;
        self.total_records = total_records;
        self
    }
}

/// Validates documents against a declared format.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    sample_size: usize,
    extractor: Extractor,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE, E7Scaling::default())
    }
}

impl Validator {
    /// Create a validator. A sample size of zero is treated as one.
    pub fn new(sample_size: usize, e7_scaling: E7Scaling) -> Self {
        Self {
            sample_size: sample_size.max(1),
            extractor: Extractor::new(e7_scaling),
        }
    }

    /// Maximum number of records inspected.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Validate `document` under `format`.
    pub fn validate(&self, document: &Value, format: FormatTag) -> ValidationReport {
        let report = self.run(document, format);
        debug!(
            format = %format,
            accepted = report.accepted,
            matches = report.sample_match_count,
            sample = report.sample_size,
            total = report.total_records,
            "validation finished"
        );
        report
    }

    fn run(&self, document: &Value, format: FormatTag) -> ValidationReport {
        let Some(records) = extract::records(document, format) else {
            let found = describe_shape(document, format);
            return ValidationReport::rejected(
                format,
                ValidationError::StructuralMismatch { format, found },
            );
        };

        if records.is_empty() {
            return ValidationReport::rejected(format, ValidationError::EmptyInput);
        }

        let sample = &records[..records.len().min(self.sample_size)];
        if format == FormatTag::Ios && !sample.iter().any(has_activity_object) {
            return ValidationReport::rejected(format, ValidationError::MissingActivityRecords)
                .with_counts(sample.len(), records.len());
        }

        let stats = self.extractor.scan_records(format, sample, |_| {});
        if stats.coordinates == 0 {
            let mut report =
                ValidationReport::rejected(format, ValidationError::NoCoordinatesFound { format })
                    .with_counts(sample.len(), records.len());
            report.unparseable_fields = stats.unparseable_fields;
            return report;
        }

        ValidationReport {
            format,
            accepted: true,
            message: format!(
                "using {} format! found {} gps coordinates in first {} {unit}. total {unit}: {}",
                format.label(),
                stats.coordinates,
                sample.len(),
                records.len(),
                unit = format.record_unit(),
            ),
            sample_match_count: stats.coordinates,
            sample_size: sample.len(),
            total_records: records.len(),
            unparseable_fields: stats.unparseable_fields,
            rejection: None,
        }
    }
}

/// Validate with the default sample size and E7 policy.
pub fn validate(document: &Value, format: FormatTag) -> ValidationReport {
    Validator::default().validate(document, format)
}

fn vendor_name(format: &FormatTag) -> &'static str {
    format.vendor_name()
}

fn coordinate_hint(format: &FormatTag) -> &'static str {
    format.coordinate_hint()
}

fn has_activity_object(record: &Value) -> bool {
    record
        .get("activity")
        .map(Value::is_object)
        .unwrap_or(false)
}

/// Describe a document whose top level does not fit `format`.
fn describe_shape(document: &Value, format: FormatTag) -> String {
    match (document, format.records_field()) {
        (Value::Object(map), Some(field)) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            if keys.is_empty() {
                format!("no '{}' array, object has no keys", field)
            } else {
                format!("no '{}' array, found keys: {}", field, keys.join(", "))
            }
        }
        (value, _) => format!("found {}", json_type_name(value)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ios_records(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|_| json!({"activity": {"start": "geo:40.7128,-74.0060", "end": "geo:40.7589,-73.9851"}}))
                .collect(),
        )
    }

    #[test]
    fn test_empty_semantic_segments() {
        let report = validate(&json!({"semanticSegments": []}), FormatTag::AndroidSemantic);
        assert!(!report.accepted);
        assert_eq!(report.sample_match_count, 0);
        assert_eq!(report.rejection, Some(ValidationError::EmptyInput));
        assert!(report.message.starts_with("your file is empty"));
    }

    #[test]
    fn test_ios_records_under_semantic_tag() {
        let report = validate(&ios_records(15), FormatTag::AndroidSemantic);
        assert!(!report.accepted);
        assert!(matches!(
            report.rejection,
            Some(ValidationError::StructuralMismatch {
                format: FormatTag::AndroidSemantic,
                ..
            })
        ));
        assert_eq!(
            report.message,
            "the data is not in the Android format (found an array)"
        );
    }

    #[test]
    fn test_semantic_document_under_ios_tag() {
        let doc = json!({"semanticSegments": [{"visit": {}}]});
        let report = validate(&doc, FormatTag::Ios);
        assert_eq!(
            report.message,
            "the data is not in the iOS format (found an object)"
        );
    }

    #[test]
    fn test_mismatch_lists_keys() {
        let doc = json!({"locations": [], "version": 2});
        let report = validate(&doc, FormatTag::AndroidLegacy);
        assert_eq!(
            report.message,
            "the data is not in the Android timelineObjects format (no 'timelineObjects' array, found keys: locations, version)"
        );
    }

    #[test]
    fn test_ios_accepted_message() {
        let report = validate(&ios_records(15), FormatTag::Ios);
        assert!(report.accepted);
        assert_eq!(report.sample_match_count, 20);
        assert_eq!(report.sample_size, 10);
        assert_eq!(report.total_records, 15);
        assert_eq!(
            report.message,
            "using ios format! found 20 gps coordinates in first 10 items. total items: 15"
        );
        assert_eq!(report.rejection, None);
    }

    #[test]
    fn test_semantic_accepted_message() {
        let doc = json!({"semanticSegments": [
            {"timelinePath": [{"point": "13.7859183°, 100.5993268°"}, {"point": "13.78°, 100.59°"}]},
            {"visit": {"topCandidate": {"placeLocation": {"latLng": "13.75°, 100.5°"}}}}
        ]});
        let report = validate(&doc, FormatTag::AndroidSemantic);
        assert!(report.accepted);
        assert_eq!(
            report.message,
            "using Android format! found 3 gps coordinates in first 2 segments. total segments: 2"
        );
    }

    #[test]
    fn test_legacy_empty_and_accepted() {
        let empty = validate(&json!({"timelineObjects": []}), FormatTag::AndroidLegacy);
        assert_eq!(empty.rejection, Some(ValidationError::EmptyInput));

        let doc = json!({"timelineObjects": [
            {"placeVisit": {"location": {"latitudeE7": 407128000, "longitudeE7": -740060000}}}
        ]});
        let report = validate(&doc, FormatTag::AndroidLegacy);
        assert!(report.accepted);
        assert_eq!(
            report.message,
            "using Android timelineObjects format! found 1 gps coordinates in first 1 timeline objects. total timeline objects: 1"
        );
    }

    #[test]
    fn test_ios_without_activity() {
        let doc = json!([{"visit": {}}, 3, "geo:1,2"]);
        let report = validate(&doc, FormatTag::Ios);
        assert_eq!(
            report.rejection,
            Some(ValidationError::MissingActivityRecords)
        );
    }

    #[test]
    fn test_rejection_keeps_record_counts() {
        let doc = json!([{"visit": {}}, {"visit": {}}, {"visit": {}}]);
        let report = validate(&doc, FormatTag::Ios);
        assert_eq!(
            report.rejection,
            Some(ValidationError::MissingActivityRecords)
        );
        assert_eq!(report.sample_size, 3);
        assert_eq!(report.total_records, 3);

        let long = Value::Array(vec![json!({"visit": {}}); 25]);
        let report = validate(&long, FormatTag::Ios);
        assert_eq!(report.sample_size, 10);
        assert_eq!(report.total_records, 25);
    }

    #[test]
    fn test_mismatch_and_empty_have_no_counts() {
        let mismatch = validate(&json!({"locations": []}), FormatTag::Ios);
        assert_eq!(mismatch.total_records, 0);

        let empty = validate(&json!([]), FormatTag::Ios);
        assert_eq!(empty.rejection, Some(ValidationError::EmptyInput));
        assert_eq!(empty.sample_size, 0);
        assert_eq!(empty.total_records, 0);
    }

    #[test]
    fn test_no_coordinates_in_sample() {
        let doc = json!([{"activity": {"start": "somewhere", "end": null}}]);
        let report = validate(&doc, FormatTag::Ios);
        assert!(!report.accepted);
        assert_eq!(
            report.rejection,
            Some(ValidationError::NoCoordinatesFound {
                format: FormatTag::Ios
            })
        );
        assert_eq!(report.sample_size, 1);
        assert_eq!(report.total_records, 1);
        assert_eq!(report.unparseable_fields, 1);
        assert_eq!(
            report.message,
            "no valid gps coordinates found in iOS format. expected 'geo:latitude,longitude'"
        );
    }

    #[test]
    fn test_sample_limit_misses_later_points() {
        let mut records = vec![json!({"activity": {}}); 10];
        records.push(json!({"activity": {"start": "geo:40.7128,-74.0060"}}));
        let doc = Value::Array(records);

        let report = validate(&doc, FormatTag::Ios);
        assert!(!report.accepted);
        assert_eq!(report.sample_match_count, 0);
        assert_eq!(extract::extract(&doc, FormatTag::Ios).len(), 1);

        let wide = Validator::new(20, E7Scaling::Scaled).validate(&doc, FormatTag::Ios);
        assert!(wide.accepted);
        assert_eq!(wide.sample_size, 11);
    }

    #[test]
    fn test_zero_sample_size_is_clamped() {
        assert_eq!(Validator::new(0, E7Scaling::Scaled).sample_size(), 1);
    }

    #[test]
    fn test_raw_e7_rejects_zero_fields() {
        let doc = json!({"timelineObjects": [
            {"placeVisit": {"location": {"latitudeE7": 0, "longitudeE7": 0}}}
        ]});
        let scaled = Validator::new(10, E7Scaling::Scaled).validate(&doc, FormatTag::AndroidLegacy);
        let raw = Validator::new(10, E7Scaling::Raw).validate(&doc, FormatTag::AndroidLegacy);
        assert!(scaled.accepted);
        assert!(!raw.accepted);
    }
}
