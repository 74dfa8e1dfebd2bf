//! Intersection solver: classifies each measurement as a located point, a
//! geometric rejection, or a skipped (unparsed) row.
//!
//! The solver is a pure function of its inputs. Labels are derived from the
//! 1-based position of each measurement in the slice.
use crate::geometry::pivot_circles;
use crate::types::{
    label_for, IntersectionPoint, Measurement, MeasurementOutcome, RejectionRecord,
    SkippedMeasurement, SolveOutput,
};
use log::debug;

/// Parse a distance field. Absent, non-numeric and non-finite values yield `None`.
pub fn parse_distance(raw: Option<&str>) -> Option<f64> {
    let v: f64 = raw?.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Solve every measurement against pivots `baseline` cm apart.
pub fn solve(measurements: &[Measurement], baseline: f64) -> SolveOutput {
    let outcomes = measurements
        .iter()
        .enumerate()
        .map(|(idx, m)| solve_one(label_for(idx), m, baseline))
        .collect();
    SolveOutput { outcomes }
}

fn solve_one(label: String, m: &Measurement, baseline: f64) -> MeasurementOutcome {
    let west = parse_distance(m.west.as_deref());
    let east = parse_distance(m.east.as_deref());
    let (Some(west), Some(east)) = (west, east) else {
        debug!(
            "{label}: skipped, unparsed distances west={:?} east={:?}",
            m.west, m.east
        );
        return MeasurementOutcome::Skipped(SkippedMeasurement { label });
    };

    let (west_circle, east_circle) = pivot_circles(west, east, baseline);
    match west_circle.intersect_north(&east_circle) {
        Ok(p) => MeasurementOutcome::Point(IntersectionPoint {
            label,
            x: p.x,
            y: p.y,
        }),
        Err(reason) => {
            debug!("{label}: rejected west={west} east={east} ({reason})");
            MeasurementOutcome::Rejected(RejectionRecord {
                label,
                west,
                east,
                reason,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RejectionReason, BASELINE_CM};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn m(west: &str, east: &str) -> Measurement {
        Measurement::new(west, east)
    }

    #[test]
    fn equal_distances_land_on_the_midline() {
        let out = solve(&[m("250", "250")], BASELINE_CM);
        let pts = out.points_vec();
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].label, "F1");
        assert!(approx_eq(pts[0].x, 175.0, 1e-9));
        assert!(approx_eq(pts[0].y, 178.536, 1e-3));
        assert_eq!(out.rejections().count(), 0);
    }

    #[test]
    fn short_tapes_are_too_far_apart() {
        let out = solve(&[m("100", "100")], BASELINE_CM);
        let rej: Vec<_> = out.rejections().collect();
        assert_eq!(rej.len(), 1);
        assert_eq!(rej[0].reason, RejectionReason::TooFarApart);
        assert_eq!((rej[0].west, rej[0].east), (100.0, 100.0));
    }

    #[test]
    fn nested_circles_are_rejected() {
        let out = solve(&[m("400", "10")], BASELINE_CM);
        let rej: Vec<_> = out.rejections().collect();
        assert_eq!(rej[0].reason, RejectionReason::OneInsideOther);
    }

    #[test]
    fn too_far_apart_wins_over_nesting() {
        // Negative radii satisfy both rules; the first rule decides.
        let out = solve(&[m("-400", "10")], BASELINE_CM);
        let rej: Vec<_> = out.rejections().collect();
        assert_eq!(rej[0].reason, RejectionReason::TooFarApart);
    }

    #[test]
    fn rounding_past_tangency_has_no_real_intersection() {
        // w + e rounds to exactly d, but h² comes out slightly negative.
        let out = solve(&[m("0.1", "349.9"), m("0.8", "349.2")], BASELINE_CM);
        assert_eq!(out.valid_points().count(), 0);
        let rej: Vec<_> = out.rejections().collect();
        assert_eq!(rej.len(), 2);
        assert_eq!(rej[0].label, "F1");
        assert_eq!(rej[0].reason, RejectionReason::NoRealIntersection);
        assert_eq!((rej[0].west, rej[0].east), (0.1, 349.9));
        assert_eq!(rej[1].reason, RejectionReason::NoRealIntersection);
    }

    #[test]
    fn unparsed_rows_are_skipped_not_rejected() {
        let out = solve(&[m("abc", "100"), m("250", "250")], BASELINE_CM);
        assert_eq!(out.rejections().count(), 0);
        let skipped: Vec<_> = out.skipped().collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].label, "F1");
        let pts = out.points_vec();
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].label, "F2");
    }

    #[test]
    fn missing_and_non_finite_fields_are_skipped() {
        let rows = vec![
            Measurement {
                west: None,
                east: Some("200".into()),
            },
            m("inf", "200"),
            m("NaN", "200"),
            m("", "200"),
        ];
        let out = solve(&rows, BASELINE_CM);
        assert_eq!(out.skipped().count(), 4);
    }

    #[test]
    fn whitespace_around_numbers_is_ignored() {
        assert_eq!(parse_distance(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_distance(Some("1e2")), Some(100.0));
        assert_eq!(parse_distance(None), None);
    }

    #[test]
    fn exact_tangency_is_not_rejected() {
        let out = solve(&[m("100", "250"), m("500", "150")], BASELINE_CM);
        assert_eq!(out.rejections().count(), 0);
        let pts = out.points_vec();
        assert!(approx_eq(pts[0].x, 100.0, 1e-12));
        assert!(approx_eq(pts[0].y, 0.0, 1e-12));
        assert!(approx_eq(pts[1].x, 500.0, 1e-12));
    }

    #[test]
    fn points_satisfy_both_circle_equations() {
        let d = BASELINE_CM;
        for w in (0..=600).step_by(25) {
            for e in (0..=600).step_by(25) {
                let (w, e) = (w as f64, e as f64);
                let out = solve(&[Measurement::from_cm(w, e)], d);
                match &out.outcomes[0] {
                    MeasurementOutcome::Point(p) => {
                        assert!(d <= w + e && d >= (w - e).abs());
                        assert!(p.y >= 0.0);
                        let tol = 1e-6 * (1.0 + w * w + e * e);
                        assert!(approx_eq(p.x * p.x + p.y * p.y, w * w, tol));
                        assert!(approx_eq((p.x - d).powi(2) + p.y * p.y, e * e, tol));
                    }
                    MeasurementOutcome::Rejected(r) => match r.reason {
                        RejectionReason::TooFarApart => assert!(d > w + e),
                        RejectionReason::OneInsideOther => assert!(d < (w - e).abs()),
                        RejectionReason::NoRealIntersection => {}
                    },
                    MeasurementOutcome::Skipped(_) => panic!("numeric input was skipped"),
                }
            }
        }
    }

    #[test]
    fn output_follows_input_order() {
        let rows = [
            m("100", "100"),
            m("x", "1"),
            m("250", "250"),
            m("400", "10"),
            m("200", "300"),
        ];
        let out = solve(&rows, BASELINE_CM);
        let labels: Vec<_> = out.outcomes.iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["F1", "F2", "F3", "F4", "F5"]);
        assert!(matches!(out.outcomes[0], MeasurementOutcome::Rejected(_)));
        assert!(matches!(out.outcomes[1], MeasurementOutcome::Skipped(_)));
        assert!(matches!(out.outcomes[2], MeasurementOutcome::Point(_)));
        assert!(matches!(out.outcomes[3], MeasurementOutcome::Rejected(_)));
        assert!(matches!(out.outcomes[4], MeasurementOutcome::Point(_)));
    }

    #[test]
    fn solving_twice_gives_identical_results() {
        let rows = [m("250", "250"), m("100", "100"), m("abc", "3")];
        assert_eq!(solve(&rows, BASELINE_CM), solve(&rows, BASELINE_CM));
    }
}
