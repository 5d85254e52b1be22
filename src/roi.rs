//! Region-of-interest masking.
//!
//! Restricts an edge map to a polygon given as fractions of the frame size,
//! so the same configuration works across resolutions. The default is the
//! road trapezoid assumed by a fixed forward-facing camera mount; expose the
//! vertices in configuration to recalibrate instead of editing constants.
//!
//! The mask is built by an even-odd scanline fill at max intensity and
//! combined with the edge map by bitwise AND, so a pixel survives only when
//! both the edge map and the mask are on. Masking an already-masked frame
//! with the same polygon is a no-op.

use crate::error::{PipelineError, Result};
use crate::image::{GrayFrame, ImageView, ImageViewMut};
use log::debug;
use nalgebra::Point2;
use serde::Deserialize;

/// Region-of-interest parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RoiParams {
    /// Polygon vertices as (fx, fy) fractions of frame width/height, in
    /// winding order.
    pub vertices: Vec<(f32, f32)>,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            // top-left, top-right, bottom-right, bottom-left
            vertices: vec![(0.4, 0.4), (0.6, 0.4), (0.8, 1.0), (0.0, 1.0)],
        }
    }
}

impl RoiParams {
    /// Scale the relative vertices to pixel coordinates.
    pub fn polygon(&self, w: usize, h: usize) -> Vec<Point2<f32>> {
        self.vertices
            .iter()
            .map(|&(fx, fy)| Point2::new(fx * w as f32, fy * h as f32))
            .collect()
    }
}

/// Mask an edge map to the configured polygon.
///
/// Output has the input's dimensions; everything outside the polygon is zero.
pub fn mask_region(edges: &GrayFrame, params: &RoiParams) -> Result<GrayFrame> {
    if edges.is_empty() {
        return Err(PipelineError::InvalidFrame(format!(
            "region masking needs a non-empty frame, got {}x{}",
            edges.w, edges.h
        )));
    }

    let polygon = params.polygon(edges.w, edges.h);
    let mask = fill_polygon(edges.w, edges.h, &polygon);

    let mut out = GrayFrame::new(edges.w, edges.h);
    for ((dst, &edge), &m) in out.data.iter_mut().zip(&edges.data).zip(&mask.data) {
        *dst = edge & m;
    }
    debug!(
        "mask_region: {} of {} edge pixels kept",
        out.data.iter().filter(|&&v| v != 0).count(),
        edges.data.iter().filter(|&&v| v != 0).count()
    );
    Ok(out)
}

/// Even-odd scanline fill of a polygon into a 255-valued mask.
///
/// Rows are sampled at pixel centers (y + 0.5). Degenerate polygons (< 3
/// vertices) produce an all-zero mask.
pub fn fill_polygon(w: usize, h: usize, polygon: &[Point2<f32>]) -> GrayFrame {
    let mut mask = GrayFrame::new(w, h);
    if polygon.len() < 3 {
        return mask;
    }

    let mut crossings: Vec<f32> = Vec::with_capacity(polygon.len());
    for y in 0..h {
        let yc = y as f32 + 0.5;
        crossings.clear();
        for i in 0..polygon.len() {
            let a = polygon[i];
            let b = polygon[(i + 1) % polygon.len()];
            // Half-open rule on y so shared vertices count once.
            if (a.y <= yc && b.y > yc) || (b.y <= yc && a.y > yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);

        let row = mask.row_mut(y);
        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].ceil().max(0.0) as usize;
            let x1 = (pair[1].floor().min(w as f32 - 1.0)) as isize;
            if x1 < 0 || x0 as isize > x1 || x0 >= w {
                continue;
            }
            for v in row[x0..=x1 as usize].iter_mut() {
                *v = 255;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_edges(w: usize, h: usize) -> GrayFrame {
        GrayFrame::from_raw(w, h, vec![255u8; w * h])
    }

    #[test]
    fn masking_keeps_dimensions() {
        let edges = full_edges(64, 48);
        let masked = mask_region(&edges, &RoiParams::default()).unwrap();
        assert_eq!((masked.w, masked.h), (64, 48));
    }

    #[test]
    fn everything_outside_polygon_is_zero() {
        let edges = full_edges(100, 100);
        let params = RoiParams::default();
        let masked = mask_region(&edges, &params).unwrap();
        let mask = fill_polygon(100, 100, &params.polygon(100, 100));
        for (idx, (&v, &m)) in masked.data.iter().zip(&mask.data).enumerate() {
            if m == 0 {
                assert_eq!(v, 0, "pixel {idx} outside the polygon must be zero");
            }
        }
        // The top rows are above the trapezoid entirely.
        assert!(masked.row(0).iter().all(|&v| v == 0));
        // A pixel well inside the trapezoid survives.
        assert_eq!(masked.get(50, 90), 255);
    }

    #[test]
    fn masking_is_idempotent() {
        let edges = full_edges(80, 60);
        let params = RoiParams::default();
        let once = mask_region(&edges, &params).unwrap();
        let twice = mask_region(&once, &params).unwrap();
        assert_eq!(once, twice, "re-masking with the same polygon must not change pixels");
    }

    #[test]
    fn degenerate_polygon_masks_everything_out() {
        let edges = full_edges(16, 16);
        let params = RoiParams {
            vertices: vec![(0.2, 0.2), (0.8, 0.8)],
        };
        let masked = mask_region(&edges, &params).unwrap();
        assert!(masked.data.iter().all(|&v| v == 0));
    }
}
