//! Serializable record of one plot action.
//!
//! `PlotReport` is what the batch runner writes to `report_json`: the inputs
//! it saw, every per-row outcome, the printed listing and stage timings.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::types::{MeasurementOutcome, SolveOutput};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotReport {
    pub section: String,
    pub baseline_cm: f64,
    pub point_count: usize,
    pub rejection_count: usize,
    pub skipped_count: usize,
    pub outcomes: Vec<MeasurementOutcome>,
    pub listing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDescriptor>,
    pub timings: TimingBreakdown,
}

impl PlotReport {
    pub fn new(
        section: &str,
        baseline_cm: f64,
        solved: &SolveOutput,
        listing: Vec<String>,
        timings: TimingBreakdown,
    ) -> Self {
        Self {
            section: section.to_string(),
            baseline_cm,
            point_count: solved.valid_points().count(),
            rejection_count: solved.rejections().count(),
            skipped_count: solved.skipped().count(),
            outcomes: solved.outcomes.clone(),
            listing,
            image: None,
            timings,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
