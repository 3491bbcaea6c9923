//! Named geographic regions and point classification.
//!
//! A [`RegionTable`] holds rectangular regions keyed by a short code
//! (`nyc`, `bkk`, ...) plus the synthetic `world` region. Given a set of
//! extracted points, [`classify`] reports which regions contain at least one
//! point and [`filter_to_region`] returns the points a region would draw.
//!
//! Tables are plain values. The built-in table can be extended or
//! overridden by the caller before use; nothing here holds global state.

mod builtin;

pub use builtin::WORLD_KEY;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::coord::{Coordinate, GeoBounds};

/// Errors from region lookups and table edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// No region with this key exists in the table.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    /// The key is reserved for the synthetic world region.
    #[error("region key '{0}' is reserved")]
    ReservedKey(String),
}

/// How a region decides whether a point belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Inclusive bounding-box test.
    Bounded,
    /// Matches every point; filtering is a no-op.
    World,
}

/// A named rectangular region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Short lookup key, e.g. `nyc`
    pub key: String,
    /// Name shown to users, e.g. `New York City`
    pub display_name: String,
    /// Inclusive bounds
    pub bounds: GeoBounds,
    /// Initial map center
    pub center: Coordinate,
    /// Initial map zoom
    pub zoom: f64,
    /// Membership rule
    pub kind: RegionKind,
}

impl Region {
    /// Default zoom for regions created without view settings.
    pub const DEFAULT_ZOOM: f64 = 10.0;

    /// Create a bounded region. The view defaults to the bounds center.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        lat_min: f64,
        lat_max: f64,
        lng_min: f64,
        lng_max: f64,
    ) -> Self {
        let bounds = GeoBounds::new(lat_min, lat_max, lng_min, lng_max);
        Self {
            key: key.into(),
            display_name: display_name.into(),
            bounds,
            center: bounds.center(),
            zoom: Self::DEFAULT_ZOOM,
            kind: RegionKind::Bounded,
        }
    }

    /// The whole-globe region.
    pub fn world() -> Self {
        Self {
            key: WORLD_KEY.to_string(),
            display_name: "World Map".to_string(),
            bounds: GeoBounds::world(),
            center: Coordinate::new(20.0, 0.0),
            zoom: 1.5,
            kind: RegionKind::World,
        }
    }

    /// Set the initial map view.
    pub fn with_view(mut self, center_lat: f64, center_lng: f64, zoom: f64) -> Self {
        self.center = Coordinate::new(center_lat, center_lng);
        self.zoom = zoom;
        self
    }

    /// Returns true for the synthetic world region.
    pub fn is_world(&self) -> bool {
        self.kind == RegionKind::World
    }

    /// Returns true if `point` belongs to this region.
    #[inline]
    pub fn contains(&self, point: &Coordinate) -> bool {
        match self.kind {
            RegionKind::World => true,
            RegionKind::Bounded => self.bounds.contains(point),
        }
    }

    /// Returns true if at least one point belongs to this region.
    pub fn has_points(&self, points: &[Coordinate]) -> bool {
        points.iter().any(|p| self.contains(p))
    }

    /// The points belonging to this region, in input order.
    pub fn filter(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        match self.kind {
            RegionKind::World => points.to_vec(),
            RegionKind::Bounded => points
                .iter()
                .filter(|p| self.bounds.contains(p))
                .copied()
                .collect(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.key)
    }
}

/// Lookup table of regions, iterated in key order.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: BTreeMap<String, Region>,
}

impl RegionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in city table plus `world`.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for region in builtin::cities().chain(std::iter::once(builtin::world())) {
            table.regions.insert(region.key.clone(), region);
        }
        table
    }

    /// Build a table from regions. Later duplicates replace earlier ones.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Result<Self, RegionError> {
        let mut table = Self::new();
        for region in regions {
            table.insert(region)?;
        }
        Ok(table)
    }

    /// Add or replace a region, returning the replaced one.
    ///
    /// A bounded region may not use the `world` key.
    pub fn insert(&mut self, region: Region) -> Result<Option<Region>, RegionError> {
        if region.key == WORLD_KEY && !region.is_world() {
            return Err(RegionError::ReservedKey(region.key));
        }
        Ok(self.regions.insert(region.key.clone(), region))
    }

    /// Look up a region by key.
    pub fn get(&self, key: &str) -> Option<&Region> {
        self.regions.get(key)
    }

    /// Look up a region by key, failing for unknown keys.
    pub fn require(&self, key: &str) -> Result<&Region, RegionError> {
        self.get(key)
            .ok_or_else(|| RegionError::UnknownRegion(key.to_string()))
    }

    /// Iterate regions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Iterate region keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the table holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Which regions contain at least one point.
///
/// Keys are exactly the key set of the table that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionAvailability {
    by_key: BTreeMap<String, bool>,
}

impl RegionAvailability {
    /// Returns true if the region exists and has points.
    pub fn is_available(&self, key: &str) -> bool {
        self.by_key.get(key).copied().unwrap_or(false)
    }

    /// Availability for a key, or `None` if the key was not classified.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.by_key.get(key).copied()
    }

    /// Keys of regions with points, in key order.
    pub fn available_keys(&self) -> impl Iterator<Item = &str> {
        self.by_key
            .iter()
            .filter(|(_, available)| **available)
            .map(|(key, _)| key.as_str())
    }

    /// Iterate `(key, available)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.by_key.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of classified regions.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns true if no regions were classified.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Determine, for every region in `table`, whether any point falls inside it.
///
/// `world` is available whenever `points` is non-empty, whatever the values.
pub fn classify(points: &[Coordinate], table: &RegionTable) -> RegionAvailability {
    let by_key = table
        .iter()
        .map(|region| (region.key.clone(), region.has_points(points)))
        .collect();
    RegionAvailability { by_key }
}

/// Return the points inside region `key`, in input order.
///
/// An empty result is not an error; an unknown key is.
pub fn filter_to_region(
    points: &[Coordinate],
    key: &str,
    table: &RegionTable,
) -> Result<Vec<Coordinate>, RegionError> {
    Ok(table.require(key)?.filter(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nyc_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(40.7128, -74.0060),
            Coordinate::new(40.7589, -73.9851),
        ]
    }

    #[test]
    fn test_builtin_table_contents() {
        let table = RegionTable::builtin();
        assert_eq!(table.len(), 32);
        assert!(table.get(WORLD_KEY).unwrap().is_world());

        let nyc = table.get("nyc").unwrap();
        assert_eq!(nyc.display_name, "New York City");
        assert_eq!(nyc.bounds, GeoBounds::new(40.5, 41.0, -74.25, -73.75));
        assert_eq!(nyc.center, Coordinate::new(40.75, -74.0));
        assert_eq!(nyc.zoom, 10.0);
    }

    #[test]
    fn test_builtin_bounds_are_ordered() {
        for region in RegionTable::builtin().iter() {
            assert!(region.bounds.is_ordered(), "{} bounds out of order", region.key);
            assert!(
                region.bounds.contains(&region.center),
                "{} view center outside bounds",
                region.key
            );
        }
    }

    #[test]
    fn test_classify_empty_points() {
        let table = RegionTable::builtin();
        let availability = classify(&[], &table);
        assert_eq!(availability.len(), table.len());
        assert!(availability.iter().all(|(_, available)| !available));
        assert_eq!(availability.get(WORLD_KEY), Some(false));
    }

    #[test]
    fn test_classify_single_nyc_point() {
        let table = RegionTable::builtin();
        let availability = classify(&[Coordinate::new(40.73, -73.99)], &table);

        assert!(availability.is_available("nyc"));
        assert!(availability.is_available(WORLD_KEY));
        let available: Vec<_> = availability.available_keys().collect();
        assert_eq!(available, vec!["nyc", "world"]);
    }

    #[test]
    fn test_classify_keys_match_table() {
        let table = RegionTable::from_regions([
            Region::new("a", "A", 0.0, 1.0, 0.0, 1.0),
            Region::new("b", "B", 10.0, 11.0, 10.0, 11.0),
        ])
        .unwrap();
        let availability = classify(&[Coordinate::new(0.5, 0.5)], &table);
        let keys: Vec<_> = availability.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(availability.is_available("a"));
        assert!(!availability.is_available("b"));
        assert_eq!(availability.get("world"), None);
    }

    #[test]
    fn test_out_of_range_points_only_match_world() {
        let table = RegionTable::builtin();
        let availability = classify(&[Coordinate::new(407128000.0, -740060000.0)], &table);
        let available: Vec<_> = availability.available_keys().collect();
        assert_eq!(available, vec!["world"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let table = RegionTable::builtin();
        let corner = [Coordinate::new(41.0, -73.75)];
        assert!(classify(&corner, &table).is_available("nyc"));
    }

    #[test]
    fn test_filter_world_returns_everything() {
        let table = RegionTable::builtin();
        let points = vec![
            Coordinate::new(13.75, 100.5),
            Coordinate::new(40.73, -73.99),
            Coordinate::new(13.75, 100.5),
        ];
        let filtered = filter_to_region(&points, WORLD_KEY, &table).unwrap();
        assert_eq!(filtered, points);
    }

    #[test]
    fn test_filter_keeps_order() {
        let table = RegionTable::builtin();
        let mut points = nyc_points();
        points.insert(1, Coordinate::new(13.75, 100.5));
        let filtered = filter_to_region(&points, "nyc", &table).unwrap();
        assert_eq!(filtered, nyc_points());
    }

    #[test]
    fn test_filter_empty_result_is_ok() {
        let table = RegionTable::builtin();
        let filtered = filter_to_region(&nyc_points(), "tokyo", &table).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_unknown_region() {
        let table = RegionTable::builtin();
        let err = filter_to_region(&nyc_points(), "atlantis", &table).unwrap_err();
        assert_eq!(err, RegionError::UnknownRegion("atlantis".to_string()));
    }

    #[test]
    fn test_insert_overrides_and_reserves_world() {
        let mut table = RegionTable::builtin();
        let replaced = table
            .insert(Region::new("nyc", "Manhattan", 40.7, 40.88, -74.02, -73.9))
            .unwrap();
        assert_eq!(replaced.unwrap().display_name, "New York City");
        assert_eq!(table.get("nyc").unwrap().display_name, "Manhattan");

        let err = table
            .insert(Region::new(WORLD_KEY, "Flat", 0.0, 1.0, 0.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, RegionError::ReservedKey(_)));
        assert!(table.get(WORLD_KEY).unwrap().is_world());
    }

    #[test]
    fn test_region_display() {
        let table = RegionTable::builtin();
        assert_eq!(table.get("bkk").unwrap().to_string(), "Bangkok (bkk)");
    }
}
