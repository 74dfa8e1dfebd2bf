//! Human-readable results listing.
use crate::types::{format_cm, IntersectionPoint, RejectionRecord, SolveOutput};

pub const POINTS_HEADING: &str = "Intersecting Points Found:";
pub const NO_POINTS: &str = "No valid intersections found.";
pub const REJECTIONS_HEADING: &str = "Non-intersecting Pairs:";

pub fn format_point(p: &IntersectionPoint) -> String {
    format!("{}: x = {:.1} cm, y = {:.1} cm", p.label, p.x, p.y)
}

pub fn format_rejection(r: &RejectionRecord) -> String {
    format!(
        "{}: west={}, east={} --> {}",
        r.label,
        format_cm(r.west),
        format_cm(r.east),
        r.reason
    )
}

/// Points first, then rejections, each in input order. Skipped rows are not
/// listed.
pub fn results_listing(out: &SolveOutput) -> Vec<String> {
    let mut lines = Vec::new();
    let points: Vec<_> = out.valid_points().collect();
    if points.is_empty() {
        lines.push(NO_POINTS.to_string());
    } else {
        lines.push(POINTS_HEADING.to_string());
        lines.extend(points.into_iter().map(format_point));
    }

    let rejections: Vec<_> = out.rejections().collect();
    if !rejections.is_empty() {
        lines.push(REJECTIONS_HEADING.to_string());
        lines.extend(rejections.into_iter().map(format_rejection));
    }
    lines
}
