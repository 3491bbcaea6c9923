//! Point layer handed to the map renderer.
//!
//! The renderer consumes a GeoJSON `FeatureCollection` with one `Point`
//! feature per coordinate plus the initial view of the selected region.
//! GeoJSON positions are `[lng, lat]`.

use serde::Serialize;

use crate::coord::{Coordinate, GeoBounds};
use crate::region::Region;

/// Padding in degrees applied by [`fit_bounds`] when none is given.
pub const DEFAULT_PADDING: f64 = 0.01;

/// Initial map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// `[lng, lat]`
    pub center: [f64; 2],
    /// Map zoom level
    pub zoom: f64,
}

impl From<&Region> for Viewport {
    fn from(region: &Region) -> Self {
        Self {
            center: [region.center.lng, region.center.lat],
            zoom: region.zoom,
        }
    }
}

/// Feature properties shown in the hover popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointProperties {
    pub id: usize,
    pub description: String,
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

/// One GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: PointProperties,
    pub geometry: PointGeometry,
}

impl PointFeature {
    fn new(index: usize, point: &Coordinate) -> Self {
        Self {
            kind: "Feature",
            properties: PointProperties {
                id: index,
                description: format!(
                    "gps point {}<br>lat: {:.6}<br>lng: {:.6}",
                    index + 1,
                    point.lat,
                    point.lng
                ),
            },
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [point.lng, point.lat],
            },
        }
    }
}

/// GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<PointFeature>,
}

/// Points of one region, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLayer {
    /// Key of the region the points were filtered to
    pub region: String,
    /// Region name for the map title
    pub display_name: String,
    /// Initial map view
    pub viewport: Viewport,
    /// Padded bounds of the points, `None` for an empty layer
    pub bounds: Option<GeoBounds>,
    /// Point features
    pub data: FeatureCollection,
}

impl PointLayer {
    /// Build the layer for `points` already filtered to `region`.
    pub fn new(region: &Region, points: &[Coordinate]) -> Self {
        Self {
            region: region.key.clone(),
            display_name: region.display_name.clone(),
            viewport: Viewport::from(region),
            bounds: fit_bounds(points, region, DEFAULT_PADDING),
            data: to_feature_collection(points),
        }
    }

    /// Number of point features.
    pub fn len(&self) -> usize {
        self.data.features.len()
    }

    /// Returns true if the layer has no points.
    pub fn is_empty(&self) -> bool {
        self.data.features.is_empty()
    }

    /// The GeoJSON payload.
    pub fn to_feature_collection(&self) -> &FeatureCollection {
        &self.data
    }
}

/// Convert points to a GeoJSON feature collection, ids numbered from 0.
pub fn to_feature_collection(points: &[Coordinate]) -> FeatureCollection {
    FeatureCollection {
        kind: "FeatureCollection",
        features: points
            .iter()
            .enumerate()
            .map(|(i, p)| PointFeature::new(i, p))
            .collect(),
    }
}

/// Smallest box holding every point, or `None` for no points.
pub fn point_bounds(points: &[Coordinate]) -> Option<GeoBounds> {
    let (first, rest) = points.split_first()?;
    let mut bounds = GeoBounds::from_point(*first);
    for point in rest {
        bounds.expand(*point);
    }
    Some(bounds)
}

/// Point bounds grown by `padding` degrees and kept inside the region.
pub fn fit_bounds(points: &[Coordinate], region: &Region, padding: f64) -> Option<GeoBounds> {
    point_bounds(points).map(|b| b.padded(padding).clamped_to(&region.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionTable;

    fn nyc() -> Region {
        RegionTable::builtin().get("nyc").cloned().unwrap()
    }

    #[test]
    fn test_feature_collection_json() {
        let points = [Coordinate::new(40.7128, -74.006)];
        let value = serde_json::to_value(to_feature_collection(&points)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {
                        "id": 0,
                        "description": "gps point 1<br>lat: 40.712800<br>lng: -74.006000"
                    },
                    "geometry": {"type": "Point", "coordinates": [-74.006, 40.7128]}
                }]
            })
        );
    }

    #[test]
    fn test_feature_numbering() {
        let points = [Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)];
        let fc = to_feature_collection(&points);
        assert_eq!(fc.features[1].properties.id, 1);
        assert!(fc.features[1].properties.description.starts_with("gps point 2<br>"));
    }

    #[test]
    fn test_viewport_from_region() {
        let viewport = Viewport::from(&nyc());
        assert_eq!(viewport.center, [-74.0, 40.75]);
        assert_eq!(viewport.zoom, 10.0);

        let world = Viewport::from(&Region::world());
        assert_eq!(world.center, [0.0, 20.0]);
        assert_eq!(world.zoom, 1.5);
    }

    #[test]
    fn test_point_bounds() {
        assert_eq!(point_bounds(&[]), None);
        let bounds = point_bounds(&[
            Coordinate::new(40.7128, -74.006),
            Coordinate::new(40.7589, -73.9851),
        ])
        .unwrap();
        assert_eq!(bounds, GeoBounds::new(40.7128, 40.7589, -74.006, -73.9851));
    }

    #[test]
    fn test_fit_bounds_clamped_to_region() {
        let region = nyc();
        let fitted = fit_bounds(&[Coordinate::new(40.995, -74.0)], &region, 0.01).unwrap();
        assert_eq!(fitted.lat_max, 41.0);
        assert!((fitted.lat_min - 40.985).abs() < 1e-9);
        assert!(region.bounds.contains(&Coordinate::new(fitted.lat_min, fitted.lng_min)));
    }

    #[test]
    fn test_empty_layer() {
        let layer = PointLayer::new(&nyc(), &[]);
        assert!(layer.is_empty());
        assert_eq!(layer.bounds, None);
        assert_eq!(layer.region, "nyc");
    }
}
