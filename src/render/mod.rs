//! Grid renderer: turns located finds into a north-up raster of the square.
pub mod font;
pub mod grid;
pub mod options;

pub use self::grid::{render_grid, GridPlot, PlotLayout};
pub use self::options::{LabelOffsetPolicy, RenderOptions, DPI_RANGE, EXPORT_DPI, PREVIEW_DPI};
