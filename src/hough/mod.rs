//! Probabilistic Hough transform for straight line segments.
//!
//! A progressive probabilistic variant (the classic `HoughLinesP` shape):
//!
//! - Collect the nonzero pixels of a binary edge map.
//! - Repeatedly pick a random remaining pixel, vote it into a (rho, theta)
//!   accumulator, and check whether its best bin reached the vote threshold.
//! - When it does, walk the edge map along the winning direction in both
//!   ways, bridging runs of empty pixels up to `max_gap`, to recover the
//!   segment's endpoints.
//! - Accept the segment when it is at least `min_length` long, then clear its
//!   pixels from the map and take back their votes so the same evidence is
//!   not reused.
//!
//! Point order is drawn from a seeded RNG, so results are deterministic for a
//! fixed seed and input. An empty result is a valid outcome, not an error.

mod ppht;

pub use ppht::detect_segments;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A raw detected line segment: an ordered pair of endpoints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point2<f32>,
    pub p1: Point2<f32>,
}

impl Segment {
    pub fn new(p0: Point2<f32>, p1: Point2<f32>) -> Self {
        Self { p0, p1 }
    }

    pub fn length(&self) -> f32 {
        (self.p1 - self.p0).norm()
    }
}

/// Hough transform parameters.
///
/// Defaults: rho 1 px, theta 1°, 20 votes,
/// minimum length 20 px.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angle resolution of the accumulator in radians.
    pub theta: f32,
    /// Accumulator votes required before a bin spawns a segment.
    pub threshold: u32,
    /// Minimum accepted segment length in pixels.
    pub min_length: f32,
    /// Maximum gap between collinear points bridged into one segment.
    /// Known deployments used 30 (later revision) and 500 (earlier);
    /// the later value is the default.
    pub max_gap: f32,
    /// RNG seed for the random point order. Fixed by default so repeated
    /// runs over the same frame agree.
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta: std::f32::consts::PI / 180.0,
            threshold: 20,
            min_length: 20.0,
            max_gap: 30.0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests;
