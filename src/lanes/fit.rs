//! Closed-form degree-1 fit through a segment's endpoints.

use crate::hough::Segment;
use serde::Serialize;

/// Slope/intercept pair of `y = slope·x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FittedLine {
    pub slope: f32,
    pub intercept: f32,
}

/// Two points determine the polynomial exactly, so the least-squares fit
/// collapses to the closed form. Vertical segments (`x0 == x1`) have no
/// finite slope and return `None`; callers treat that as a recoverable
/// per-segment skip.
pub fn fit_segment(segment: &Segment) -> Option<FittedLine> {
    let dx = segment.p1.x - segment.p0.x;
    if dx == 0.0 {
        return None;
    }
    let slope = (segment.p1.y - segment.p0.y) / dx;
    let intercept = segment.p0.y - slope * segment.p0.x;
    Some(FittedLine { slope, intercept })
}
