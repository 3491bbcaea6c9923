//! Coordinate type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// Scale factor of the legacy `latitudeE7`/`longitudeE7` integer fields.
pub const E7_SCALE: f64 = 10_000_000.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Parsers do not enforce the valid range. An out-of-range coordinate is
/// still a coordinate; it simply never falls inside a bounded region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate from degrees × 10^7 integer fields.
    #[inline]
    pub fn from_e7(lat_e7: i64, lng_e7: i64) -> Self {
        Self {
            lat: lat_e7 as f64 / E7_SCALE,
            lng: lng_e7 as f64 / E7_SCALE,
        }
    }

    /// Returns true if both components lie in the WGS84 degree ranges.
    pub fn is_in_range(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LNG..=MAX_LNG).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Axis-aligned geographic bounding box, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Southern edge
    pub lat_min: f64,
    /// Northern edge
    pub lat_max: f64,
    /// Western edge
    pub lng_min: f64,
    /// Eastern edge
    pub lng_max: f64,
}

impl GeoBounds {
    /// Create a new bounding box.
    pub fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Bounds covering the whole globe.
    pub fn world() -> Self {
        Self::new(MIN_LAT, MAX_LAT, MIN_LNG, MAX_LNG)
    }

    /// Create a bounding box from a single point.
    pub fn from_point(point: Coordinate) -> Self {
        Self::new(point.lat, point.lat, point.lng, point.lng)
    }

    /// Returns true if `point` lies inside or on the edge of the box.
    #[inline]
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lng_min
            && point.lng <= self.lng_max
    }

    /// Expand this bounding box to include a point.
    pub fn expand(&mut self, point: Coordinate) {
        self.lat_min = self.lat_min.min(point.lat);
        self.lat_max = self.lat_max.max(point.lat);
        self.lng_min = self.lng_min.min(point.lng);
        self.lng_max = self.lng_max.max(point.lng);
    }

    /// Grow the box by `padding` degrees on every side.
    pub fn padded(&self, padding: f64) -> Self {
        Self::new(
            self.lat_min - padding,
            self.lat_max + padding,
            self.lng_min - padding,
            self.lng_max + padding,
        )
    }

    /// Clamp this box so it does not extend past `outer`.
    pub fn clamped_to(&self, outer: &GeoBounds) -> Self {
        Self::new(
            self.lat_min.max(outer.lat_min),
            self.lat_max.min(outer.lat_max),
            self.lng_min.max(outer.lng_min),
            self.lng_max.min(outer.lng_max),
        )
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lng_min + self.lng_max) / 2.0,
        )
    }

    /// Returns true if min ≤ max on both axes.
    pub fn is_ordered(&self) -> bool {
        self.lat_min <= self.lat_max && self.lng_min <= self.lng_max
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat {} to {}, lng {} to {}",
            self.lat_min, self.lat_max, self.lng_min, self.lng_max
        )
    }
}
