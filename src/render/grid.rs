//! Survey-square plot: 10 cm grid, 50 cm ticks, one marker per located find.
//!
//! Layout is expressed in units of 1 px at 100 DPI and scaled by
//! `RenderOptions::pixel_scale`, so the plot area is always exactly
//! 350 units wide and 1 cm maps to `dpi / 100` pixels.
use super::font::{draw_text, draw_text_vertical, text_size, TextStyle};
use super::options::RenderOptions;
use crate::image::canvas::{Canvas, BLACK, GRAY, GREEN, WHITE};
use crate::transform::PlotTransform;
use crate::types::{IntersectionPoint, SQUARE_SIDE_CM};
use log::debug;

pub const GRID_SPACING_CM: f64 = 10.0;
pub const TICK_INTERVAL_CM: f64 = 50.0;
pub const Y_CAPTION: &str = "Scale: 1 square = 10cm";
pub const TITLE: &str = "North ↑";

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICK_LEN: f64 = 4.0;
const TICK_GAP: f64 = 4.0;
const MARKER_RADIUS: f64 = 4.0;
const LABEL_PAD: f64 = 1.0;
const LABEL_BOX_ALPHA: f32 = 0.6;

/// Rendered plot plus the data→pixel mapping used to draw it.
#[derive(Clone, Debug)]
pub struct GridPlot {
    pub canvas: Canvas,
    pub transform: PlotTransform,
}

/// Pixel geometry of a plot at a given resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub transform: PlotTransform,
}

impl PlotLayout {
    pub fn new(options: &RenderOptions) -> Self {
        let k = options.pixel_scale();
        let side_px = SQUARE_SIDE_CM * k;
        let width = ((MARGIN_LEFT + MARGIN_RIGHT) * k + side_px).round() as u32;
        let height = ((MARGIN_TOP + MARGIN_BOTTOM) * k + side_px).round() as u32;
        let transform = PlotTransform::square(SQUARE_SIDE_CM, side_px, MARGIN_LEFT * k, MARGIN_TOP * k);
        Self {
            scale: k,
            width,
            height,
            transform,
        }
    }

    fn text_scale(&self) -> u32 {
        (self.scale.round() as u32).max(1)
    }

    fn line_px(&self) -> u32 {
        self.text_scale()
    }
}

pub fn render_grid(
    points: &[IntersectionPoint],
    section_label: &str,
    options: &RenderOptions,
) -> GridPlot {
    let layout = PlotLayout::new(options);
    let mut canvas = Canvas::new(layout.width, layout.height, WHITE);

    draw_grid_lines(&mut canvas, &layout);
    draw_frame_and_ticks(&mut canvas, &layout);
    draw_captions(&mut canvas, &layout, section_label);

    for (idx, p) in points.iter().enumerate() {
        let ordinal = idx + 1;
        let (ox, oy) = options.label_offsets.offset(ordinal, &p.label);
        draw_marker(&mut canvas, &layout, p);
        draw_point_label(&mut canvas, &layout, p, ox, oy);
    }

    debug!(
        "render_grid: {} points, {}x{} px at {} dpi",
        points.len(),
        layout.width,
        layout.height,
        options.dpi
    );

    GridPlot {
        canvas,
        transform: layout.transform,
    }
}

fn grid_positions(step: f64) -> impl Iterator<Item = f64> {
    let n = (SQUARE_SIDE_CM / step).round() as usize;
    (0..=n).map(move |i| i as f64 * step)
}

fn draw_grid_lines(canvas: &mut Canvas, layout: &PlotLayout) {
    let t = &layout.transform;
    for v in grid_positions(GRID_SPACING_CM) {
        let [x, y_bottom] = t.to_pixel(v, 0.0);
        let [_, y_top] = t.to_pixel(v, SQUARE_SIDE_CM);
        canvas.vline(x, y_top, y_bottom, layout.line_px(), GRAY);

        let [x_left, y] = t.to_pixel(0.0, v);
        let [x_right, _] = t.to_pixel(SQUARE_SIDE_CM, v);
        canvas.hline(y, x_left, x_right, layout.line_px(), GRAY);
    }
}

fn draw_frame_and_ticks(canvas: &mut Canvas, layout: &PlotLayout) {
    let t = &layout.transform;
    let k = layout.scale;
    let w = layout.line_px();
    let [left, bottom] = t.to_pixel(0.0, 0.0);
    let [right, top] = t.to_pixel(SQUARE_SIDE_CM, SQUARE_SIDE_CM);

    canvas.hline(top, left, right, w, BLACK);
    canvas.hline(bottom, left, right, w, BLACK);
    canvas.vline(left, top, bottom, w, BLACK);
    canvas.vline(right, top, bottom, w, BLACK);

    let style = TextStyle {
        scale: layout.text_scale(),
        color: BLACK,
        bold: false,
    };
    for v in grid_positions(TICK_INTERVAL_CM) {
        let text = format!("{}", v as i64);
        let (tw, th) = text_size(&text, style.scale);

        let [x, _] = t.to_pixel(v, 0.0);
        canvas.vline(x, bottom, bottom + TICK_LEN * k, w, BLACK);
        let ty = bottom + (TICK_LEN + TICK_GAP) * k;
        draw_text(canvas, (x - tw as f64 / 2.0).round() as i64, ty.round() as i64, &text, style);

        let [_, y] = t.to_pixel(0.0, v);
        canvas.hline(y, left - TICK_LEN * k, left, w, BLACK);
        let tx = left - (TICK_LEN + TICK_GAP) * k - tw as f64;
        draw_text(canvas, tx.round() as i64, (y - th as f64 / 2.0).round() as i64, &text, style);
    }
}

fn draw_captions(canvas: &mut Canvas, layout: &PlotLayout, section_label: &str) {
    let t = &layout.transform;
    let k = layout.scale;
    let [left, bottom] = t.to_pixel(0.0, 0.0);
    let [right, top] = t.to_pixel(SQUARE_SIDE_CM, SQUARE_SIDE_CM);
    let mid_x = (left + right) / 2.0;
    let mid_y = (top + bottom) / 2.0;

    let caption = TextStyle {
        scale: layout.text_scale() * 2,
        color: BLACK,
        bold: false,
    };

    let (tw, th) = text_size(TITLE, caption.scale);
    let ty = top - 12.0 * k - th as f64;
    draw_text(canvas, (mid_x - tw as f64 / 2.0).round() as i64, ty.round() as i64, TITLE, caption);

    let (sw, _) = text_size(section_label, caption.scale);
    let sy = bottom + (TICK_LEN + TICK_GAP + 7.0 + 8.0) * k;
    draw_text(
        canvas,
        (mid_x - sw as f64 / 2.0).round() as i64,
        sy.round() as i64,
        section_label,
        caption,
    );

    let (yw, _) = text_size(Y_CAPTION, caption.scale);
    let x = 10.0 * k;
    let y = mid_y + yw as f64 / 2.0;
    draw_text_vertical(canvas, x.round() as i64, y.round() as i64, Y_CAPTION, caption);
}

fn draw_marker(canvas: &mut Canvas, layout: &PlotLayout, p: &IntersectionPoint) {
    let [px, py] = layout.transform.to_pixel(p.x, p.y);
    canvas.fill_circle(px, py, MARKER_RADIUS * layout.scale, GREEN);
}

/// Label anchored by its bottom-left corner at `(x + ox, y + oy)`.
fn draw_point_label(
    canvas: &mut Canvas,
    layout: &PlotLayout,
    p: &IntersectionPoint,
    ox: f64,
    oy: f64,
) {
    let style = TextStyle {
        scale: layout.text_scale(),
        color: BLACK,
        bold: true,
    };
    let (tw, th) = text_size(&p.label, style.scale);
    let [ax, ay] = layout.transform.to_pixel(p.x + ox, p.y + oy);
    let x0 = ax.round() as i64;
    let y0 = (ay - th as f64).round() as i64;
    let pad = (LABEL_PAD * layout.scale).round() as i64;
    canvas.fill_rect_alpha(
        x0 - pad,
        y0 - pad,
        x0 + tw as i64 + 1 + pad,
        y0 + th as i64 + pad,
        WHITE,
        LABEL_BOX_ALPHA,
    );
    draw_text(canvas, x0, y0, &p.label, style);
}
