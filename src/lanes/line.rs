//! Per-side lane accumulator and its reduction to one representative line.

use super::fit::FittedLine;
use super::ClassifyParams;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Default vertical fraction for the representative line's top endpoint,
/// just below the default region-of-interest top so the drawn line stays
/// inside the analyzed area.
pub const DEFAULT_TOP_FRACTION: f32 = 0.6;

/// Near-horizontal reduced fits produce endpoints far outside the frame;
/// below this slope magnitude a side reports no coordinates instead.
const MIN_DRAWABLE_SLOPE: f32 = 1e-6;

/// How a side's accumulated fits reduce to one representative line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionPolicy {
    /// Use only the most recently added fit, the historical behavior where
    /// each addition overwrote the side's coordinates. Kept as the default
    /// rather than silently fixed.
    #[default]
    LastOnly,
    /// Unweighted mean of all accumulated slopes and intercepts. The likely
    /// intended behavior; opt in explicitly.
    Average,
}

/// Representative line endpoints for one side, anchored to the frame bottom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneCoordinates {
    /// Endpoint on the last frame row.
    pub bottom: Point2<f32>,
    /// Endpoint at the configured top fraction of the frame height.
    pub top: Point2<f32>,
}

/// Accumulator for one side (left or right) of the lane.
///
/// Holds every fitted candidate contributed during classification; the
/// representative line is recomputed deterministically from the accumulated
/// fits on demand, so `LastOnly` vs `Average` stays a pluggable reduction
/// rather than implicit overwrite semantics.
#[derive(Clone, Debug)]
pub struct LaneLine {
    fits: Vec<FittedLine>,
    frame_h: usize,
    params: ClassifyParams,
}

impl LaneLine {
    pub fn new(frame_h: usize, params: ClassifyParams) -> Self {
        Self {
            fits: Vec::new(),
            frame_h,
            params,
        }
    }

    /// Contribute one fitted candidate to this side.
    pub fn add(&mut self, fit: FittedLine) {
        self.fits.push(fit);
    }

    pub fn fit_count(&self) -> usize {
        self.fits.len()
    }

    pub fn fits(&self) -> &[FittedLine] {
        &self.fits
    }

    /// The reduced fit this side's coordinates derive from, if any.
    pub fn reduced_fit(&self) -> Option<FittedLine> {
        reduce(&self.fits, self.params.reduction)
    }

    /// Representative endpoints for this side.
    ///
    /// `None` when no segment contributed (an ordinary outcome, drawn as a
    /// no-op) or when the reduced fit is too close to horizontal to anchor
    /// inside the frame.
    pub fn coordinates(&self) -> Option<LaneCoordinates> {
        let fit = self.reduced_fit()?;
        if fit.slope.abs() < MIN_DRAWABLE_SLOPE {
            return None;
        }
        let top_fraction = self
            .params
            .top_fraction
            .unwrap_or(DEFAULT_TOP_FRACTION)
            .clamp(0.0, 1.0);
        let y_bottom = (self.frame_h.max(1) - 1) as f32;
        let y_top = top_fraction * self.frame_h as f32;
        Some(LaneCoordinates {
            bottom: Point2::new((y_bottom - fit.intercept) / fit.slope, y_bottom),
            top: Point2::new((y_top - fit.intercept) / fit.slope, y_top),
        })
    }
}

/// Pure reduction of accumulated fits under a policy.
fn reduce(fits: &[FittedLine], policy: ReductionPolicy) -> Option<FittedLine> {
    match policy {
        ReductionPolicy::LastOnly => fits.last().copied(),
        ReductionPolicy::Average => {
            if fits.is_empty() {
                return None;
            }
            let n = fits.len() as f32;
            Some(FittedLine {
                slope: fits.iter().map(|f| f.slope).sum::<f32>() / n,
                intercept: fits.iter().map(|f| f.intercept).sum::<f32>() / n,
            })
        }
    }
}
