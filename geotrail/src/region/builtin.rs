//! Built-in city regions.
//!
//! Bounds are city-center boxes. The view center and zoom
//! are what the map opens on when a region is selected.

use super::Region;

/// Key of the synthetic whole-globe region.
pub const WORLD_KEY: &str = "world";

/// (key, name, lat_min, lat_max, lng_min, lng_max, center_lng, center_lat, zoom)
type CityRow = (&'static str, &'static str, f64, f64, f64, f64, f64, f64, f64);

const CITIES: [CityRow; 31] = [
    ("amsterdam", "Amsterdam", 52.3, 52.4, 4.8, 5.0, 4.9, 52.35, 11.0),
    ("barcelona", "Barcelona", 41.3, 41.4, 2.1, 2.2, 2.15, 41.35, 11.0),
    ("beijing", "Beijing", 39.8, 40.0, 116.3, 116.5, 116.4, 39.9, 10.0),
    ("berlin", "Berlin", 52.4, 52.6, 13.3, 13.5, 13.4, 52.5, 10.0),
    ("bkk", "Bangkok", 13.6, 13.9, 100.3, 100.7, 100.5, 13.75, 10.0),
    ("copenhagen", "Copenhagen", 55.6, 55.8, 12.4, 12.7, 12.55, 55.7, 11.0),
    ("delhi", "Delhi", 28.4, 28.8, 77.0, 77.3, 77.15, 28.6, 10.0),
    ("helsinki", "Helsinki", 60.1, 60.2, 24.9, 25.0, 24.95, 60.15, 11.0),
    ("hongkong", "Hong Kong", 22.2, 22.4, 114.1, 114.3, 114.2, 22.3, 11.0),
    ("la", "Los Angeles", 33.7, 34.3, -118.7, -118.0, -118.25, 34.05, 9.0),
    ("lisbon", "Lisbon", 38.7, 38.8, -9.2, -9.1, -9.15, 38.75, 11.0),
    ("london", "London", 51.4, 51.6, -0.2, 0.1, -0.05, 51.5, 10.0),
    ("melbourne", "Melbourne", -37.9, -37.7, 144.9, 145.0, 144.95, -37.8, 10.0),
    ("mexico", "Mexico City", 19.2, 19.6, -99.3, -99.0, -99.15, 19.4, 10.0),
    ("milan", "Milan", 45.4, 45.5, 9.1, 9.3, 9.2, 45.45, 11.0),
    ("montreal", "Montreal", 45.4, 45.6, -73.7, -73.5, -73.6, 45.5, 10.0),
    ("mumbai", "Mumbai", 18.9, 19.3, 72.7, 73.1, 72.9, 19.1, 10.0),
    ("nyc", "New York City", 40.5, 41.0, -74.25, -73.75, -74.0, 40.75, 10.0),
    ("osaka", "Osaka", 34.5, 34.8, 135.3, 135.7, 135.5, 34.65, 10.0),
    ("paris", "Paris", 48.8, 48.9, 2.2, 2.5, 2.35, 48.85, 11.0),
    ("prague", "Prague", 50.0, 50.1, 14.4, 14.5, 14.45, 50.05, 11.0),
    ("rome", "Rome", 41.8, 41.9, 12.4, 12.6, 12.5, 41.85, 11.0),
    ("saopaulo", "São Paulo", -23.8, -23.3, -46.8, -46.4, -46.6, -23.55, 10.0),
    ("seoul", "Seoul", 37.4, 37.7, 126.8, 127.2, 127.0, 37.55, 10.0),
    ("shanghai", "Shanghai", 31.1, 31.3, 121.4, 121.6, 121.5, 31.2, 10.0),
    ("singapore", "Singapore", 1.2, 1.4, 103.8, 104.0, 103.9, 1.3, 11.0),
    ("stockholm", "Stockholm", 59.3, 59.4, 18.0, 18.1, 18.05, 59.35, 11.0),
    ("sydney", "Sydney", -33.9, -33.8, 151.1, 151.3, 151.2, -33.85, 10.0),
    ("tokyo", "Tokyo", 35.6, 35.8, 139.6, 139.8, 139.7, 35.7, 10.0),
    ("vienna", "Vienna", 48.1, 48.3, 16.3, 16.4, 16.35, 48.2, 11.0),
    ("zurich", "Zurich", 47.3, 47.4, 8.5, 8.6, 8.55, 47.35, 11.0),
];

/// The synthetic region covering the whole globe.
pub fn world() -> Region {
    Region::world()
}

/// All built-in city regions (without `world`).
pub fn cities() -> impl Iterator<Item = Region> {
    CITIES.iter().map(
        |&(key, name, lat_min, lat_max, lng_min, lng_max, center_lng, center_lat, zoom)| {
            Region::new(key, name, lat_min, lat_max, lng_min, lng_max)
                .with_view(center_lat, center_lng, zoom)
        },
    )
}
