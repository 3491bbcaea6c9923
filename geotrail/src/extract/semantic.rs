//! Android semantic timeline records (`semanticSegments`).
//!
//! A segment may carry any combination of:
//!
//! - `timelinePath`: `[{"point": "13.78°, 100.59°"}, ...]`
//! - `visit.topCandidate.placeLocation.latLng`
//! - `activity.start.latLng` and `activity.end.latLng`
//!
//! The three sources are independent and all of them are read.

use serde_json::Value;

use super::{path, present, RecordScan};
use crate::coord::parse_degree_value;

const PLACE_LOCATION: [&str; 4] = ["visit", "topCandidate", "placeLocation", "latLng"];
const ACTIVITY_START: [&str; 3] = ["activity", "start", "latLng"];
const ACTIVITY_END: [&str; 3] = ["activity", "end", "latLng"];

pub(super) fn scan_record(segment: &Value, scan: &mut RecordScan<'_>) {
    if !segment.is_object() {
        return;
    }

    if let Some(timeline) = segment.get("timelinePath").and_then(Value::as_array) {
        for step in timeline {
            if let Some(point) = present(path(step, &["point"])) {
                scan.accept("timelinePath.point", parse_degree_value(point));
            }
        }
    }

    if let Some(lat_lng) = present(path(segment, &PLACE_LOCATION)) {
        scan.accept("visit.topCandidate.placeLocation.latLng", parse_degree_value(lat_lng));
    }

    if let Some(lat_lng) = present(path(segment, &ACTIVITY_START)) {
        scan.accept("activity.start.latLng", parse_degree_value(lat_lng));
    }
    if let Some(lat_lng) = present(path(segment, &ACTIVITY_END)) {
        scan.accept("activity.end.latLng", parse_degree_value(lat_lng));
    }
}

#[cfg(test)]
mod tests {
    use crate::coord::Coordinate;
    use crate::extract::extract;
    use crate::format::FormatTag;
    use serde_json::json;

    #[test]
    fn test_all_sources_in_order() {
        let doc = json!({
            "semanticSegments": [{
                "activity": {
                    "start": {"latLng": "3°, 3°"},
                    "end": {"latLng": "4°, 4°"}
                },
                "visit": {"topCandidate": {"placeLocation": {"latLng": "2°, 2°"}}},
                "timelinePath": [{"point": "1°, 1°"}, {"point": "1.5°, 1.5°"}]
            }]
        });

        let points = extract(&doc, FormatTag::AndroidSemantic);
        assert_eq!(
            points,
            vec![
                Coordinate::new(1.0, 1.0),
                Coordinate::new(1.5, 1.5),
                Coordinate::new(2.0, 2.0),
                Coordinate::new(3.0, 3.0),
                Coordinate::new(4.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_same_location_from_two_sources_appended_twice() {
        let doc = json!({
            "semanticSegments": [{
                "visit": {"topCandidate": {"placeLocation": {"latLng": "13.7°, 100.5°"}}},
                "activity": {"start": {"latLng": "13.7°, 100.5°"}}
            }]
        });
        let points = extract(&doc, FormatTag::AndroidSemantic);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], points[1]);
    }

    #[test]
    fn test_incomplete_visit_path_ignored() {
        let doc = json!({
            "semanticSegments": [
                {"visit": {"topCandidate": {"latLng": "1°, 1°"}}},
                {"visit": {"placeLocation": {"latLng": "1°, 1°"}}},
                {"visit": {"topCandidate": {"placeLocation": "1°, 1°"}}}
            ]
        });
        assert!(extract(&doc, FormatTag::AndroidSemantic).is_empty());
    }

    #[test]
    fn test_malformed_fragments_skipped() {
        let doc = json!({
            "semanticSegments": [
                null,
                42,
                {"timelinePath": "1°, 1°"},
                {"timelinePath": [null, 7, {"point": 5}, {"point": "x°, y°"}, {"point": "9°, 9°"}]},
                {"activity": {"start": "1°, 1°", "end": {"latLng": ["1", "1"]}}}
            ]
        });
        assert_eq!(
            extract(&doc, FormatTag::AndroidSemantic),
            vec![Coordinate::new(9.0, 9.0)]
        );
    }

    #[test]
    fn test_segments_must_be_array() {
        assert!(extract(&json!({"semanticSegments": null}), FormatTag::AndroidSemantic).is_empty());
        assert!(extract(&json!({"segments": []}), FormatTag::AndroidSemantic).is_empty());
    }
}
