//! Two-circle intersection on a survey baseline.
//!
//! Each pivot defines a circle whose radius is the taped distance to the find.
//! Of the two intersections only the one to the left of the directed
//! west→east baseline is reported. With the baseline along +x, that is the
//! north (non-negative y) side.
use crate::types::RejectionReason;
use nalgebra::{Point2, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersection on the left side of the directed line `self → other`.
    ///
    /// Rules are applied in order and compare exactly, so tangent circles
    /// (`d == r0 + r1` or `d == |r0 - r1|`) still produce a point.
    pub fn intersect_north(&self, other: &Circle) -> Result<Point2<f64>, RejectionReason> {
        let axis: Vector2<f64> = other.center - self.center;
        let d = axis.norm();
        let (r0, r1) = (self.radius, other.radius);

        if d > r0 + r1 {
            return Err(RejectionReason::TooFarApart);
        }
        if d < (r0 - r1).abs() {
            return Err(RejectionReason::OneInsideOther);
        }

        let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        let h_sq = r0 * r0 - a * a;
        // NaN covers coincident centres.
        if h_sq.is_nan() || h_sq < 0.0 {
            return Err(RejectionReason::NoRealIntersection);
        }

        let ux = axis / d;
        let left = Vector2::new(-ux.y, ux.x);
        Ok(self.center + ux * a + left * h_sq.sqrt())
    }
}

/// Circles of radius `west` at the origin and `east` at `(baseline, 0)`.
pub fn pivot_circles(west: f64, east: f64, baseline: f64) -> (Circle, Circle) {
    (
        Circle::new(Point2::origin(), west),
        Circle::new(Point2::new(baseline, 0.0), east),
    )
}
