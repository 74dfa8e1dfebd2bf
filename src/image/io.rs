//! I/O helpers for rendered plots and JSON reports.
//!
//! - `encode_png`: encode an RGB raster into in-memory PNG bytes.
//! - `PngExport`: PNG bytes plus the download name and MIME type.
//! - `write_png_file`: write PNG bytes to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const EXPORT_FILE_NAME: &str = "intersection_plot.png";
pub const EXPORT_MIME: &str = "image/png";

/// Encoded plot ready to be downloaded or written out.
#[derive(Clone, Debug)]
pub struct PngExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
    pub bytes: Vec<u8>,
}

impl PngExport {
    pub fn from_image(img: &RgbImage, dpi: u32) -> Result<Self, String> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            width: img.width(),
            height: img.height(),
            dpi,
            bytes: encode_png(img)?,
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        write_png_file(path, &self.bytes)
    }
}

/// Encode an RGB raster as PNG.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to encode PNG: {e}"))?;
    Ok(bytes)
}

/// Write PNG bytes to `path`, creating parent directories.
pub fn write_png_file(path: &Path, bytes: &[u8]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
