//! Edge extraction: grayscale conversion, Gaussian smoothing, Canny.
//!
//! The stage mirrors the classic lane-detection front end:
//!
//! - Color → luma conversion with the standard BT.601 weighting; the channel
//!   order of the capture buffer is a configuration option, not something
//!   inferred per frame.
//! - Separable Gaussian blur. A non-positive sigma derives one from the
//!   kernel size (`0.3*((ksize-1)*0.5 - 1) + 0.8`), the conventional rule.
//! - Canny edge detection: Sobel gradients with border clamping,
//!   direction-aligned non-maximum suppression, and double-threshold
//!   hysteresis. Defaults 50/150 keep the recommended 1:3 ratio.
//!
//! Output is a binary edge map (edge pixels 255, rest 0) with the same
//! dimensions as the input. The only error condition is an empty input frame.

mod blur;
mod canny;
mod grad;
mod luma;

pub use blur::gaussian_blur;
pub use canny::canny;
pub use grad::{sobel_gradients, Grad};
pub use luma::color_to_luma;

use crate::error::{PipelineError, Result};
use crate::image::color::ColorOrder;
use crate::image::{ColorFrame, GrayFrame};
use log::debug;
use serde::Deserialize;

/// Edge-extraction parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Channel order of the capture buffer.
    pub color_order: ColorOrder,
    /// Gaussian kernel size (odd, >= 1).
    pub kernel_size: usize,
    /// Gaussian sigma; non-positive derives one from the kernel size.
    pub sigma: f32,
    /// Canny low threshold (8-bit intensity units).
    pub low_threshold: f32,
    /// Canny high threshold.
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            color_order: ColorOrder::Bgr,
            kernel_size: 5,
            sigma: 0.0,
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Convert a color frame to a binary edge map.
///
/// Rejects empty frames with [`PipelineError::InvalidFrame`]; otherwise the
/// result has the input's dimensions, single channel.
pub fn extract_edges(frame: &ColorFrame, params: &EdgeParams) -> Result<GrayFrame> {
    if frame.is_empty() {
        return Err(PipelineError::InvalidFrame(format!(
            "edge extraction needs a non-empty frame, got {}x{}",
            frame.w, frame.h
        )));
    }

    let luma = color_to_luma(frame, params.color_order);
    let smoothed = gaussian_blur(&luma, params.kernel_size, params.sigma);
    let edges = canny(&smoothed, params.low_threshold, params.high_threshold);
    debug!(
        "extract_edges: {}x{} -> {} edge pixels",
        frame.w,
        frame.h,
        edges.data.iter().filter(|&&v| v != 0).count()
    );
    Ok(edges)
}

#[cfg(test)]
mod tests;
