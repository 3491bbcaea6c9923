//! Coordinate extraction from location-history documents.
//!
//! Each export format stores positions in a different nesting of records.
//! The extractor walks the schema of the declared [`FormatTag`] and collects
//! every coordinate it can parse, in document order. Malformed fragments are
//! skipped; they are counted in [`ScanStats`] but never reported as errors.
//!
//! # Architecture
//!
//! ```text
//! document ──► records(format) ──► scan_records ──► per-format record walker
//!                (top-level array)   (shared with      (ios / semantic / legacy)
//!                                     validation)
//! ```

mod ios;
mod legacy;
mod semantic;

use serde_json::Value;
use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::format::{E7Scaling, FormatTag};

/// Counters collected while scanning records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of records visited.
    pub records: usize,
    /// Number of coordinates successfully parsed.
    pub coordinates: usize,
    /// Coordinate-bearing fields that existed but could not be parsed.
    pub unparseable_fields: usize,
}

/// Returns the top-level record array for `format`, or `None` when the
/// document does not have the expected shape.
pub fn records(document: &Value, format: FormatTag) -> Option<&Vec<Value>> {
    match format.records_field() {
        None => document.as_array(),
        Some(field) => document.as_object()?.get(field)?.as_array(),
    }
}

/// Walks records and feeds parsed coordinates to a sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    e7_scaling: E7Scaling,
}

impl Extractor {
    /// Create an extractor with the given legacy E7 policy.
    pub fn new(e7_scaling: E7Scaling) -> Self {
        Self { e7_scaling }
    }

    /// The legacy E7 policy in use.
    pub fn e7_scaling(&self) -> E7Scaling {
        self.e7_scaling
    }

    /// Extract every coordinate from `document` under `format`.
    ///
    /// Returns an empty vector when the top-level shape does not match.
    pub fn extract(&self, document: &Value, format: FormatTag) -> Vec<Coordinate> {
        let Some(records) = records(document, format) else {
            debug!(format = %format, "document shape does not match format, nothing to extract");
            return Vec::new();
        };

        let mut points = Vec::new();
        let stats = self.scan_records(format, records, |point| points.push(point));

        debug!(
            format = %format,
            records = stats.records,
            coordinates = stats.coordinates,
            unparseable = stats.unparseable_fields,
            "extraction complete"
        );
        points
    }

    /// Scan `records` as records of `format`, calling `sink` for each parsed
    /// coordinate in document order.
    pub fn scan_records<F>(&self, format: FormatTag, records: &[Value], mut sink: F) -> ScanStats
    where
        F: FnMut(Coordinate),
    {
        let mut scan = RecordScan {
            sink: &mut sink,
            stats: ScanStats::default(),
        };

        for record in records {
            scan.stats.records += 1;
            match format {
                FormatTag::Ios => ios::scan_record(record, &mut scan),
                FormatTag::AndroidSemantic => semantic::scan_record(record, &mut scan),
                FormatTag::AndroidLegacy => legacy::scan_record(record, self.e7_scaling, &mut scan),
            }
        }

        scan.stats
    }
}

/// Extract coordinates with default options.
pub fn extract(document: &Value, format: FormatTag) -> Vec<Coordinate> {
    Extractor::default().extract(document, format)
}

/// In-progress scan shared by the per-format record walkers.
pub(crate) struct RecordScan<'a> {
    sink: &'a mut dyn FnMut(Coordinate),
    stats: ScanStats,
}

impl RecordScan<'_> {
    /// Record the outcome of parsing one coordinate-bearing field.
    fn accept(&mut self, field: &'static str, parsed: Option<Coordinate>) {
        match parsed {
            Some(point) => {
                self.stats.coordinates += 1;
                (self.sink)(point);
            }
            None => {
                self.stats.unparseable_fields += 1;
                trace!(field, "skipping unparseable coordinate field");
            }
        }
    }
}

/// Look up a nested object path, returning the final value.
fn path<'v>(value: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// A field is present when it exists and is not JSON `null`.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_ios_requires_array() {
        assert!(records(&json!([]), FormatTag::Ios).is_some());
        assert!(records(&json!({"semanticSegments": []}), FormatTag::Ios).is_none());
    }

    #[test]
    fn test_records_semantic_requires_field_array() {
        let doc = json!({"semanticSegments": [{}]});
        assert_eq!(records(&doc, FormatTag::AndroidSemantic).unwrap().len(), 1);
        assert!(records(&json!({"semanticSegments": {}}), FormatTag::AndroidSemantic).is_none());
        assert!(records(&json!([1, 2]), FormatTag::AndroidSemantic).is_none());
    }

    #[test]
    fn test_wrong_tag_yields_nothing() {
        let ios = json!([{"activity": {"start": "geo:40.7128,-74.0060"}}]);
        assert!(extract(&ios, FormatTag::AndroidSemantic).is_empty());
        assert!(extract(&ios, FormatTag::AndroidLegacy).is_empty());
        assert_eq!(extract(&ios, FormatTag::Ios).len(), 1);
    }

    #[test]
    fn test_scalar_documents_yield_nothing() {
        for doc in [json!(null), json!(42), json!("geo:1,2")] {
            for format in FormatTag::ALL {
                assert!(extract(&doc, format).is_empty());
            }
        }
    }

    #[test]
    fn test_scan_stats_count_fields() {
        let doc = json!([
            {"activity": {"start": "geo:1,2", "end": "garbage"}},
            {"visit": {}},
            7
        ]);
        let records = records(&doc, FormatTag::Ios).unwrap();
        let mut seen = Vec::new();
        let stats = Extractor::default().scan_records(FormatTag::Ios, records, |p| seen.push(p));

        assert_eq!(
            stats,
            ScanStats {
                records: 3,
                coordinates: 1,
                unparseable_fields: 1,
            }
        );
        assert_eq!(seen, vec![Coordinate::new(1.0, 2.0)]);
    }

    #[test]
    fn test_path_lookup() {
        let doc = json!({"a": {"b": {"c": 1}}});
        assert_eq!(path(&doc, &["a", "b", "c"]), Some(&json!(1)));
        assert_eq!(path(&doc, &["a", "x", "c"]), None);
        assert_eq!(path(&json!({"a": 5}), &["a", "b"]), None);
    }
}
