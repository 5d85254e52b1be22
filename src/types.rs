//! Pipeline result types.

use crate::image::{ColorFrame, GrayFrame};
use crate::lanes::LanePair;

/// The frame handed back to the display collaborator, shaped by the
/// configured pipeline endpoint.
#[derive(Clone, Debug)]
pub enum OutputFrame {
    /// Binary edge map (the historical display path showed this directly).
    Edges(GrayFrame),
    /// Edge map restricted to the region of interest.
    Masked(GrayFrame),
    /// Original frame with the lane overlay blended in.
    Annotated(ColorFrame),
}

impl OutputFrame {
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            OutputFrame::Edges(f) | OutputFrame::Masked(f) => (f.w, f.h),
            OutputFrame::Annotated(f) => (f.w, f.h),
        }
    }
}

/// Per-frame detection report.
#[derive(Clone, Debug)]
pub struct LaneReport {
    /// Output frame at the configured pipeline endpoint.
    pub output: OutputFrame,
    /// Left/right lane accumulators (coordinates may be absent per side).
    pub lanes: LanePair,
    /// Raw segments found by the Hough stage.
    pub segment_count: usize,
    /// Wall-clock time spent in the pipeline for this frame.
    pub latency_ms: f64,
}
