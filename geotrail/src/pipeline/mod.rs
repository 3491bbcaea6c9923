//! End-to-end analysis of one document.
//!
//! Runs the stages in order and stops at the first one that rejects:
//!
//! ```text
//! region lookup ─► validate (sample) ─► extract (full) ─► classify ─► filter
//! ```
//!
//! An empty region is a normal result, reported through [`Analysis::summary`].

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::coord::Coordinate;
use crate::extract::Extractor;
use crate::format::{E7Scaling, FormatTag};
use crate::layer::PointLayer;
use crate::region::{classify, Region, RegionAvailability, RegionError, RegionTable};
use crate::validate::{ValidationReport, Validator, DEFAULT_SAMPLE_SIZE};

/// Pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Records inspected by validation
    pub sample_size: usize,
    /// Legacy E7 policy for validation and extraction
    pub e7_scaling: E7Scaling,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            e7_scaling: E7Scaling::default(),
        }
    }
}

/// Why a pipeline run produced no analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnknownRegion(#[from] RegionError),

    /// Validation rejected the document; the report carries the message.
    #[error("{}", rejection_message(.0))]
    Rejected(ValidationReport),
}

fn rejection_message(report: &ValidationReport) -> &str {
    &report.message
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Accepted validation report
    pub report: ValidationReport,
    /// Every extracted point, in document order
    pub points: Vec<Coordinate>,
    /// Which regions have points
    pub availability: RegionAvailability,
    /// Selected region
    pub region: Region,
    /// Points inside the selected region
    pub region_points: Vec<Coordinate>,
}

impl Analysis {
    /// Returns true when the selected region holds no points.
    pub fn is_region_empty(&self) -> bool {
        self.region_points.is_empty()
    }

    /// Status line for the run.
    pub fn summary(&self) -> String {
        if self.is_region_empty() {
            format!(
                "no gps points found within {} area. found {} total points.",
                self.region.display_name,
                self.points.len()
            )
        } else if self.region.is_world() {
            format!("showing all {} gps points on the world map", self.points.len())
        } else {
            format!(
                "showing {} of {} gps points within {}",
                self.region_points.len(),
                self.points.len(),
                self.region.display_name
            )
        }
    }

    /// Point layer for the selected region.
    pub fn layer(&self) -> PointLayer {
        PointLayer::new(&self.region, &self.region_points)
    }
}

/// Validate, extract, classify and filter a document.
#[derive(Debug, Clone)]
pub struct Pipeline {
    validator: Validator,
    extractor: Extractor,
    regions: RegionTable,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, regions: RegionTable) -> Self {
        Self {
            validator: Validator::new(config.sample_size, config.e7_scaling),
            extractor: Extractor::new(config.e7_scaling),
            regions,
        }
    }

    /// The region table in use.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Validate only.
    pub fn validate(&self, document: &Value, format: FormatTag) -> ValidationReport {
        self.validator.validate(document, format)
    }

    /// Run every stage for `region_key`.
    pub fn run(
        &self,
        document: &Value,
        format: FormatTag,
        region_key: &str,
    ) -> Result<Analysis, PipelineError> {
        let region = self.regions.require(region_key)?.clone();

        let report = self.validator.validate(document, format);
        if !report.accepted {
            warn!(format = %format, reason = %report.message, "document rejected");
            return Err(PipelineError::Rejected(report));
        }

        let points = self.extractor.extract(document, format);
        let availability = classify(&points, &self.regions);
        let region_points = region.filter(&points);

        info!(
            format = %format,
            region = %region.key,
            total = points.len(),
            in_region = region_points.len(),
            regions_with_points = availability.available_keys().count(),
            "analysis complete"
        );

        Ok(Analysis {
            report,
            points,
            availability,
            region,
            region_points,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default(), RegionTable::builtin())
    }
}
