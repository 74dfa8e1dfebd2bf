//! Affine mapping from survey-square coordinates (cm, north up) to raster
//! pixels (origin top-left, y down).
use nalgebra::{Matrix3, Vector3};

const EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    /// data -> pixel, homogeneous
    pub mtx: Matrix3<f64>,
}

impl PlotTransform {
    /// Map `[0, side] x [0, side]` onto a square of `side_px` pixels whose
    /// top-left corner sits at `(left_px, top_px)`.
    pub fn square(side: f64, side_px: f64, left_px: f64, top_px: f64) -> Self {
        let s = if side.abs() > EPS { side_px / side } else { 1.0 };
        let mtx = Matrix3::new(
            s, 0.0, left_px, //
            0.0, -s, top_px + side_px, //
            0.0, 0.0, 1.0,
        );
        Self { mtx }
    }

    /// Pixels per data unit along x.
    pub fn scale(&self) -> f64 {
        self.mtx[(0, 0)]
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> [f64; 2] {
        let v = self.mtx * Vector3::new(x, y, 1.0);
        [v[0], v[1]]
    }

    /// Convert a data-space offset (e.g. label nudge) to a pixel offset.
    pub fn offset_to_pixel(&self, dx: f64, dy: f64) -> [f64; 2] {
        let v = self.mtx * Vector3::new(dx, dy, 0.0);
        [v[0], v[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn corners_map_north_up() {
        let t = PlotTransform::square(350.0, 350.0, 60.0, 40.0);
        assert_eq!(t.to_pixel(0.0, 0.0), [60.0, 390.0]);
        assert_eq!(t.to_pixel(350.0, 350.0), [410.0, 40.0]);
        assert_eq!(t.to_pixel(0.0, 350.0), [60.0, 40.0]);
    }

    #[test]
    fn export_scale_triples_pixel_distances() {
        let t = PlotTransform::square(350.0, 1050.0, 180.0, 120.0);
        assert!(approx_eq(t.scale(), 3.0));
        let [px, py] = t.to_pixel(175.0, 178.5);
        assert!(approx_eq(px, 180.0 + 525.0));
        assert!(approx_eq(py, 120.0 + 1050.0 - 535.5));
    }

    #[test]
    fn offsets_ignore_translation() {
        let t = PlotTransform::square(350.0, 700.0, 100.0, 80.0);
        assert_eq!(t.offset_to_pixel(8.0, 8.0), [16.0, -16.0]);
    }
}
