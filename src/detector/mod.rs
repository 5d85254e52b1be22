//! Lane detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Converts the capture frame to a binary edge map (grayscale, Gaussian
//!   smoothing, Canny).
//! - Restricts the edge map to the configured trapezoidal region of
//!   interest.
//! - Runs a progressive probabilistic Hough transform to recover raw line
//!   segments.
//! - Fits and classifies the segments into left/right lane candidates and
//!   reduces each side to one representative line.
//! - Optionally blends the lane overlay onto the original frame, depending
//!   on the configured pipeline endpoint.
//!
//! Every stage is a pure function over in-memory buffers; the detector holds
//! only configuration, so independent frames may be processed concurrently
//! from separate detectors (or one shared detector behind `&self`).
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the tools.
//! - `pipeline` – the main [`LaneDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{LaneParams, OutputStage};
pub use pipeline::LaneDetector;
