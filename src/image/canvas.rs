//! Owned RGB raster with the handful of primitives the grid plot needs.
//!
//! All coordinates are in pixels; shapes are clipped to the canvas so callers
//! may draw partially outside it.
use image::{Rgb, RgbImage};

pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];
pub const BLACK: Color = [0, 0, 0];
pub const GRAY: Color = [128, 128, 128];
pub const GREEN: Color = [0, 128, 0];

#[derive(Clone, Debug)]
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Canvas of `w × h` filled with `background`.
    pub fn new(w: u32, h: u32, background: Color) -> Self {
        Self {
            img: RgbImage::from_pixel(w, h, Rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.img.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.img
    }

    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < self.img.width() as i64 && y < self.img.height() as i64 {
            self.img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    /// Blend `color` over the existing pixel with opacity `alpha` in [0, 1].
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        for (dst, &src) in px.0.iter_mut().zip(color.iter()) {
            let v = a * src as f32 + (1.0 - a) * *dst as f32;
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        self.fill_rect_alpha(x0, y0, x1, y1, color, 1.0);
    }

    pub fn fill_rect_alpha(
        &mut self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        color: Color,
        alpha: f32,
    ) {
        let (x0, x1) = (x0.max(0), x1.min(self.img.width() as i64));
        let (y0, y1) = (y0.max(0), y1.min(self.img.height() as i64));
        for y in y0..y1 {
            for x in x0..x1 {
                if alpha >= 1.0 {
                    self.put(x, y, color);
                } else {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    /// Vertical line of `thickness` pixels centred on column `x`.
    pub fn vline(&mut self, x: f64, y0: f64, y1: f64, thickness: u32, color: Color) {
        let (x0, x1) = centred_span(x, thickness);
        let (ya, yb) = ordered(y0, y1);
        self.fill_rect(x0, ya.round() as i64, x1, yb.round() as i64 + 1, color);
    }

    /// Horizontal line of `thickness` pixels centred on row `y`.
    pub fn hline(&mut self, y: f64, x0: f64, x1: f64, thickness: u32, color: Color) {
        let (y0, y1) = centred_span(y, thickness);
        let (xa, xb) = ordered(x0, x1);
        self.fill_rect(xa.round() as i64, y0, xb.round() as i64 + 1, y1, color);
    }

    /// Filled disc centred at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let r = radius.max(0.0);
        let (xmin, xmax) = ((cx - r).floor() as i64, (cx + r).ceil() as i64);
        let (ymin, ymax) = ((cy - r).floor() as i64, (cy + r).ceil() as i64);
        let r2 = r * r;
        for y in ymin..=ymax {
            for x in xmin..=xmax {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn centred_span(c: f64, thickness: u32) -> (i64, i64) {
    let t = thickness.max(1) as i64;
    let start = c.round() as i64 - t / 2;
    (start, start + t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_clipped_to_the_canvas() {
        let mut c = Canvas::new(10, 10, WHITE);
        c.fill_rect(-5, -5, 3, 3, BLACK);
        c.fill_circle(9.0, 9.0, 4.0, GREEN);
        assert_eq!(c.pixel(0, 0), BLACK);
        assert_eq!(c.pixel(2, 2), BLACK);
        assert_eq!(c.pixel(3, 3), WHITE);
        assert_eq!(c.pixel(9, 9), GREEN);
    }

    #[test]
    fn lines_cover_their_extent() {
        let mut c = Canvas::new(20, 20, WHITE);
        c.vline(5.0, 2.0, 12.0, 1, GRAY);
        c.hline(15.0, 12.0, 3.0, 2, BLACK);
        assert_eq!(c.pixel(5, 2), GRAY);
        assert_eq!(c.pixel(5, 12), GRAY);
        assert_eq!(c.pixel(5, 13), WHITE);
        assert_eq!(c.pixel(3, 14), BLACK);
        assert_eq!(c.pixel(12, 15), BLACK);
    }

    #[test]
    fn blending_mixes_toward_the_source() {
        let mut c = Canvas::new(1, 1, BLACK);
        c.blend(0, 0, WHITE, 0.6);
        assert_eq!(c.pixel(0, 0), [153, 153, 153]);
    }
}
