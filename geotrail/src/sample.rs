//! Built-in sample documents.
//!
//! Small location histories for New York and Bangkok in each export format,
//! for trying the pipeline without a real export. Every sample passes
//! validation under its own format, and all of its points fall inside the
//! city's built-in region.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;

use crate::coord::{Coordinate, E7_SCALE};
use crate::format::FormatTag;

/// City a sample document is set in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SampleCity {
    #[default]
    Nyc,
    Bkk,
}

impl SampleCity {
    /// All sample cities.
    pub const ALL: [SampleCity; 2] = [SampleCity::Nyc, SampleCity::Bkk];

    /// Key of the built-in region the sample points fall in.
    pub fn region_key(&self) -> &'static str {
        match self {
            SampleCity::Nyc => "nyc",
            SampleCity::Bkk => "bkk",
        }
    }

    /// Eight points, taken pairwise as activity start and end.
    fn points(&self) -> [Coordinate; 8] {
        match self {
            SampleCity::Nyc => [
                Coordinate::new(40.7128, -74.0060),
                Coordinate::new(40.7589, -73.9851),
                Coordinate::new(40.6892, -74.0445),
                Coordinate::new(40.7505, -73.9934),
                Coordinate::new(40.7831, -73.9712),
                Coordinate::new(40.7282, -73.7949),
                Coordinate::new(40.6782, -73.9442),
                Coordinate::new(40.7614, -73.9776),
            ],
            SampleCity::Bkk => [
                Coordinate::new(13.7563, 100.5018),
                Coordinate::new(13.7280, 100.5240),
                Coordinate::new(13.7398, 100.5398),
                Coordinate::new(13.7658, 100.5378),
                Coordinate::new(13.7200, 100.4900),
                Coordinate::new(13.7800, 100.5600),
                Coordinate::new(13.7100, 100.5100),
                Coordinate::new(13.7700, 100.5500),
            ],
        }
    }
}

impl fmt::Display for SampleCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.region_key())
    }
}

/// Error returned when a sample city is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no sample data for '{0}' (expected one of: nyc, bkk)")]
pub struct SampleCityError(pub String);

impl FromStr for SampleCity {
    type Err = SampleCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nyc" => Ok(SampleCity::Nyc),
            "bkk" => Ok(SampleCity::Bkk),
            _ => Err(SampleCityError(s.to_string())),
        }
    }
}

/// Build the sample document for `city` in `format`.
pub fn sample_document(format: FormatTag, city: SampleCity) -> Value {
    let p = city.points();
    match format {
        FormatTag::Ios => Value::Array(
            p.chunks(2)
                .map(|pair| {
                    json!({"activity": {"start": geo_uri(&pair[0]), "end": geo_uri(&pair[1])}})
                })
                .collect(),
        ),
        FormatTag::AndroidSemantic => json!({"semanticSegments": [
            {"timelinePath": [{"point": degree_pair(&p[0]), "time": "2023-01-01T10:00:00.000Z"}]},
            {"visit": {"topCandidate": {"placeLocation": {"latLng": degree_pair(&p[1])}}}},
            {"activity": {
                "start": {"latLng": degree_pair(&p[2])},
                "end": {"latLng": degree_pair(&p[3])}
            }},
            {"timelinePath": [{"point": degree_pair(&p[4]), "time": "2023-01-01T12:00:00.000Z"}]}
        ]}),
        FormatTag::AndroidLegacy => json!({"timelineObjects": [
            {"placeVisit": {"location": e7_location(&p[0])}},
            {"activitySegment": {"startLocation": e7_location(&p[2]), "endLocation": e7_location(&p[3])}},
            {"placeVisit": {"location": e7_location(&p[4])}},
            {"activitySegment": {"startLocation": e7_location(&p[6]), "endLocation": e7_location(&p[7])}}
        ]}),
    }
}

/// File name the sample is saved under, e.g. `sample-nyc-ios-data.json`.
pub fn sample_file_name(format: FormatTag, city: SampleCity) -> String {
    format!("sample-{}-{}-data.json", city, format)
}

fn geo_uri(point: &Coordinate) -> String {
    format!("geo:{:.4},{:.4}", point.lat, point.lng)
}

fn degree_pair(point: &Coordinate) -> String {
    format!("{:.4}°, {:.4}°", point.lat, point.lng)
}

fn e7_location(point: &Coordinate) -> Value {
    json!({
        "latitudeE7": (point.lat * E7_SCALE).round() as i64,
        "longitudeE7": (point.lng * E7_SCALE).round() as i64,
    })
}
