//! Slope-based lane classification and linear fitting.
//!
//! Every detected segment is fitted with a first-degree polynomial
//! (`y = slope·x + intercept`) through its two endpoints, then classified by
//! the sign of the slope: negative goes to the left lane, non-negative to the
//! right. The convention is screen-coordinate specific: y grows downward, so
//! a line ascending toward the image center from the left has negative
//! slope. Flipping the sign silently swaps left and right.
//!
//! Each side accumulates its fitted candidates in a [`LaneLine`] and exposes
//! one representative line through a pure reduction over the accumulated
//! fits, selected by [`ReductionPolicy`]. `LastOnly` (the default) keeps only
//! the most recently added fit, the historical behavior; `Average` combines
//! all fits per side. See the
//! policy docs for the trade-off.
//!
//! Degenerate (vertical) segments cannot be fitted; they are skipped with a
//! debug log and never abort the frame. Zero segments on a side is an
//! ordinary outcome: that side simply reports no coordinates.

mod fit;
mod line;

pub use fit::{fit_segment, FittedLine};
pub use line::{LaneCoordinates, LaneLine, ReductionPolicy};

use crate::hough::Segment;
use log::debug;
use serde::Deserialize;

/// Classification parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassifyParams {
    /// How a side's accumulated fits reduce to one representative line.
    pub reduction: ReductionPolicy,
    /// Vertical fraction of the frame where the representative line's top
    /// endpoint is evaluated (the bottom endpoint sits on the last row).
    pub top_fraction: Option<f32>,
}

/// The two per-side accumulators produced by classification.
#[derive(Clone, Debug)]
pub struct LanePair {
    pub left: LaneLine,
    pub right: LaneLine,
}

/// Classify segments into left/right lane candidates and accumulate fits.
///
/// `frame_h` is the pixel height of the frame the segments came from; it
/// anchors the representative endpoints. Unfittable segments are skipped.
pub fn classify_segments(segments: &[Segment], frame_h: usize, params: &ClassifyParams) -> LanePair {
    let mut left = LaneLine::new(frame_h, params.clone());
    let mut right = LaneLine::new(frame_h, params.clone());

    for segment in segments {
        let Some(fitted) = fit_segment(segment) else {
            debug!("classify_segments: skipping degenerate segment {segment:?}");
            continue;
        };
        if fitted.slope < 0.0 {
            left.add(fitted);
        } else {
            right.add(fitted);
        }
    }

    debug!(
        "classify_segments: {} left / {} right candidates from {} segments",
        left.fit_count(),
        right.fit_count(),
        segments.len()
    );
    LanePair { left, right }
}
