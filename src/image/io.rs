//! I/O helpers for frames and JSON, used by the demo tools.
//!
//! - `load_color_frame`: read a PNG/JPEG/etc. into an owned BGR or RGB buffer.
//! - `save_gray_frame` / `save_color_frame`: write frames as PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::color::{ColorFrame, ColorOrder, CHANNELS};
use super::GrayFrame;
use crate::error::{PipelineError, Result};
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as an interleaved 3-channel frame in the requested
/// channel order.
pub fn load_color_frame(path: &Path, order: ColorOrder) -> Result<ColorFrame> {
    let img = image::open(path)
        .map_err(|e| PipelineError::Io(format!("failed to open {}: {e}", path.display())))?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut data = img.into_raw();
    if order == ColorOrder::Bgr {
        for px in data.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
    }
    Ok(ColorFrame::from_raw(w, h, data))
}

/// Save a single-channel frame as a grayscale PNG.
pub fn save_gray_frame(frame: &GrayFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let img = image::GrayImage::from_raw(frame.w as u32, frame.h as u32, frame.data.clone())
        .ok_or_else(|| PipelineError::Io("failed to create image buffer".to_string()))?;
    img.save(path)
        .map_err(|e| PipelineError::Io(format!("failed to save {}: {e}", path.display())))
}

/// Save a color frame as an RGB PNG, swapping channels if the frame is BGR.
pub fn save_color_frame(frame: &ColorFrame, order: ColorOrder, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut data = frame.data.clone();
    if order == ColorOrder::Bgr {
        for px in data.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
    }
    let img = RgbImage::from_raw(frame.w as u32, frame.h as u32, data)
        .ok_or_else(|| PipelineError::Io("failed to create image buffer".to_string()))?;
    img.save(path)
        .map_err(|e| PipelineError::Io(format!("failed to save {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PipelineError::Io(format!("failed to serialize {}: {e}", path.display())))?;
    fs::write(path, json)
        .map_err(|e| PipelineError::Io(format!("failed to write {}: {e}", path.display())))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| PipelineError::Io(format!("failed to create {}: {e}", parent.display())))?;
        }
    }
    Ok(())
}
