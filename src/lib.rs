#![doc = include_str!("../README.md")]

// Core: pure solver and its geometry.
pub mod geometry;
pub mod solver;
pub mod types;

// Rendering and output plumbing.
pub mod image;
pub mod render;
pub mod report;
pub mod transform;

// Session, pipeline and tooling.
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod plotter;
pub mod session;

// --- High-level re-exports -------------------------------------------------

pub use crate::plotter::{PlotOutcome, PlotParams, Plotter};
pub use crate::session::{MeasurementId, Session};
pub use crate::solver::solve;
pub use crate::types::{
    IntersectionPoint, Measurement, MeasurementOutcome, RejectionReason, RejectionRecord,
    SolveOutput, BASELINE_CM,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for scripts and tests.
///
/// ```
/// use intersection_plotter::prelude::*;
///
/// let out = solve(&[Measurement::new("250", "250")], BASELINE_CM);
/// let p = out.valid_points().next().unwrap();
/// assert_eq!(format!("{:.1} {:.1}", p.x, p.y), "175.0 178.5");
/// ```
pub mod prelude {
    pub use crate::render::{LabelOffsetPolicy, RenderOptions};
    pub use crate::{
        solve, Measurement, MeasurementOutcome, Plotter, RejectionReason, Session, BASELINE_CM,
    };
}
