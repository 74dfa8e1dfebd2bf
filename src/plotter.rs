//! Plot pipeline: solve → listing → render, with per-stage timings.
use crate::diagnostics::{ImageDescriptor, PlotReport, TimingBreakdown};
use crate::image::io::PngExport;
use crate::render::{render_grid, GridPlot, RenderOptions};
use crate::report::results_listing;
use crate::solver::solve;
use crate::types::{IntersectionPoint, Measurement, SolveOutput, BASELINE_CM};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotParams {
    /// Pivot separation in cm.
    pub baseline_cm: f64,
    /// On-screen rendering.
    pub preview: RenderOptions,
    /// Downloadable PNG rendering.
    pub export: RenderOptions,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            baseline_cm: BASELINE_CM,
            preview: RenderOptions::preview(),
            export: RenderOptions::export(),
        }
    }
}

/// Everything one "plot" action produces.
#[derive(Clone, Debug)]
pub struct PlotOutcome {
    pub solved: SolveOutput,
    pub listing: Vec<String>,
    pub plot: GridPlot,
    pub report: PlotReport,
}

impl PlotOutcome {
    pub fn points(&self) -> Vec<IntersectionPoint> {
        self.solved.points_vec()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Plotter {
    params: PlotParams,
}

impl Plotter {
    pub fn new(params: PlotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    pub fn plot(&self, measurements: &[Measurement], section: &str) -> PlotOutcome {
        let mut timings = TimingBreakdown::default();
        let solved = timings.time("solve", || solve(measurements, self.params.baseline_cm));
        let listing = results_listing(&solved);
        let points = solved.points_vec();
        let plot = timings.time("render", || {
            render_grid(&points, section, &self.params.preview)
        });

        let mut report = PlotReport::new(
            section,
            self.params.baseline_cm,
            &solved,
            listing.clone(),
            timings,
        );
        report.image = Some(ImageDescriptor {
            width: plot.canvas.width(),
            height: plot.canvas.height(),
            dpi: self.params.preview.dpi,
            path: None,
        });
        debug!(
            "Plotter::plot points={} rejected={} skipped={} total_ms={:.3}",
            report.point_count, report.rejection_count, report.skipped_count, report.timings.total_ms
        );

        PlotOutcome {
            solved,
            listing,
            plot,
            report,
        }
    }

    /// Re-render `points` at export resolution and encode to PNG.
    pub fn export(&self, points: &[IntersectionPoint], section: &str) -> Result<PngExport, String> {
        let opts = &self.params.export;
        let plot = render_grid(points, section, opts);
        PngExport::from_image(plot.canvas.as_image(), opts.dpi)
    }
}
