pub mod canvas;
pub mod io;

pub use self::canvas::{Canvas, Color};
pub use self::io::{encode_png, write_json_file, PngExport};
