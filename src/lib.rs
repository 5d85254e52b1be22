#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod error;
pub mod image;
pub mod types;

// Stage modules, public so tools can run stages in isolation.
pub mod edges;
pub mod hough;
pub mod lanes;
pub mod overlay;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LaneDetector, LaneParams, OutputStage};
pub use crate::error::{PipelineError, Result};
pub use crate::types::LaneReport;

// Stage outputs that are generally useful.
pub use crate::hough::Segment;
pub use crate::lanes::{LaneLine, LanePair, ReductionPolicy};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let frame = ColorFrame::new(640, 480);
/// let detector = LaneDetector::new(LaneParams::default());
/// let report = detector.process(&frame).expect("non-empty frame");
/// println!("segments={} latency_ms={:.3}", report.segment_count, report.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ColorFrame, GrayFrame};
    pub use crate::{LaneDetector, LaneParams, LanePair, LaneReport, OutputStage};
}
