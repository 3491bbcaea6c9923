//! Legacy Android `Timeline.json` records (`timelineObjects`).
//!
//! Positions are stored as integer degrees × 10^7:
//!
//! ```json
//! {"timelineObjects": [
//!     {"placeVisit": {"location": {"latitudeE7": 407128000, "longitudeE7": -740060000}}},
//!     {"activitySegment": {"startLocation": {...}, "endLocation": {...}}}
//! ]}
//! ```

use serde_json::Value;

use super::{path, present, RecordScan};
use crate::coord::Coordinate;
use crate::format::E7Scaling;

/// Location objects read from each timeline object, in emission order.
const LOCATIONS: [(&str, [&str; 2]); 3] = [
    ("placeVisit.location", ["placeVisit", "location"]),
    ("activitySegment.startLocation", ["activitySegment", "startLocation"]),
    ("activitySegment.endLocation", ["activitySegment", "endLocation"]),
];

pub(super) fn scan_record(record: &Value, scaling: E7Scaling, scan: &mut RecordScan<'_>) {
    if !record.is_object() {
        return;
    }

    for (field, keys) in &LOCATIONS {
        if let Some(location) = present(path(record, keys)) {
            scan.accept(*field, parse_e7_location(location, scaling));
        }
    }
}

/// Convert a `{latitudeE7, longitudeE7}` object to a coordinate.
fn parse_e7_location(location: &Value, scaling: E7Scaling) -> Option<Coordinate> {
    let lat_e7 = location.get("latitudeE7")?.as_i64()?;
    let lng_e7 = location.get("longitudeE7")?.as_i64()?;

    match scaling {
        E7Scaling::Scaled => Some(Coordinate::from_e7(lat_e7, lng_e7)),
        E7Scaling::Raw if lat_e7 == 0 || lng_e7 == 0 => None,
        E7Scaling::Raw => Some(Coordinate::new(lat_e7 as f64, lng_e7 as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Extractor;
    use crate::format::FormatTag;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "timelineObjects": [
                {"placeVisit": {"location": {"latitudeE7": 407128000, "longitudeE7": -740060000}}},
                {"activitySegment": {
                    "startLocation": {"latitudeE7": 137563000, "longitudeE7": 1005018000},
                    "endLocation": {"latitudeE7": 0, "longitudeE7": 1005018000}
                }}
            ]
        })
    }

    #[test]
    fn test_scaled_recovers_degrees() {
        let points = Extractor::new(E7Scaling::Scaled).extract(&sample(), FormatTag::AndroidLegacy);
        assert_eq!(points.len(), 3);
        assert!((points[0].lat - 40.7128).abs() < 1e-9);
        assert!((points[0].lng - (-74.006)).abs() < 1e-9);
        assert!((points[1].lat - 13.7563).abs() < 1e-9);
        assert_eq!(points[2].lat, 0.0);
    }

    #[test]
    fn test_raw_keeps_integers_and_skips_zero_fields() {
        let points = Extractor::new(E7Scaling::Raw).extract(&sample(), FormatTag::AndroidLegacy);
        assert_eq!(
            points,
            vec![
                Coordinate::new(407128000.0, -740060000.0),
                Coordinate::new(137563000.0, 1005018000.0),
            ]
        );
        assert!(points.iter().all(|p| !p.is_in_range()));
    }

    #[test]
    fn test_non_integer_fields_skipped() {
        let doc = json!({
            "timelineObjects": [
                {"placeVisit": {"location": {"latitudeE7": "407128000", "longitudeE7": -740060000}}},
                {"placeVisit": {"location": {"latitudeE7": 40.5, "longitudeE7": -74.0}}},
                {"placeVisit": {"location": {"latitudeE7": 407128000}}},
                {"placeVisit": {"lat": 1}}
            ]
        });
        assert!(Extractor::default()
            .extract(&doc, FormatTag::AndroidLegacy)
            .is_empty());
    }
}
