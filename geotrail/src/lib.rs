//! GeoTrail - location-history extraction and region filtering
//!
//! This library reads personal location-history exports, extracts every
//! coordinate they hold and works out which named regions those points
//! fall in. Three export schemas are supported, selected explicitly by the
//! caller through [`FormatTag`]:
//!
//! - `ios`: iPhone `location-history.json` (`geo:` URIs)
//! - `android-semantic`: Android `semanticSegments` timeline (degree pairs)
//! - `android`: legacy Android `Timeline.json` (`latitudeE7`/`longitudeE7`)
//!
//! # High-Level API
//!
//! ```
//! use geotrail::{FormatTag, Pipeline};
//! use serde_json::json;
//!
//! let document = json!([
//!     {"activity": {"start": "geo:40.7128,-74.0060", "end": "geo:40.7589,-73.9851"}}
//! ]);
//!
//! let analysis = Pipeline::default()
//!     .run(&document, FormatTag::Ios, "nyc")
//!     .unwrap();
//!
//! assert_eq!(analysis.region_points.len(), 2);
//! assert!(analysis.availability.is_available("nyc"));
//! ```

pub mod config;
pub mod coord;
pub mod document;
pub mod extract;
pub mod format;
pub mod layer;
pub mod logging;
pub mod pipeline;
pub mod region;
pub mod sample;
pub mod validate;

pub use coord::{Coordinate, GeoBounds};
pub use extract::{extract, Extractor};
pub use format::{E7Scaling, FormatTag};
pub use pipeline::{Analysis, Pipeline, PipelineConfig, PipelineError};
pub use region::{classify, filter_to_region, Region, RegionAvailability, RegionTable};
pub use validate::{validate, ValidationReport, Validator};

/// Version of the GeoTrail library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
