//! Lane overlay rendering.
//!
//! Draws each side's representative line into a zero-filled overlay frame and
//! blends the overlay onto the original: `out = src_weight·src +
//! overlay_weight·overlay + bias`, saturating to 8 bits. A side without
//! coordinates is simply not drawn; when neither side has coordinates the
//! original frame is returned unchanged.

use crate::error::{PipelineError, Result};
use crate::image::color::CHANNELS;
use crate::image::ColorFrame;
use crate::lanes::{LaneCoordinates, LanePair};
use nalgebra::Point2;
use serde::Deserialize;

/// Overlay parameters. Defaults: green, 5 px stroke, 0.8/1.0 blend.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OverlayParams {
    /// Stroke color in the frame's channel order (green either way).
    pub color: [u8; CHANNELS],
    /// Stroke thickness in pixels.
    pub thickness: f32,
    /// Blend weight of the original frame.
    pub src_weight: f32,
    /// Blend weight of the overlay.
    pub overlay_weight: f32,
    /// Additive blend bias.
    pub bias: f32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 5.0,
            src_weight: 0.8,
            overlay_weight: 1.0,
            bias: 0.0,
        }
    }
}

/// Draw the lane pair over the original frame.
///
/// Output dimensions match the input. Sides without coordinates are a no-op.
pub fn draw_lanes(frame: &ColorFrame, lanes: &LanePair, params: &OverlayParams) -> Result<ColorFrame> {
    if frame.is_empty() {
        return Err(PipelineError::InvalidFrame(format!(
            "overlay needs a non-empty frame, got {}x{}",
            frame.w, frame.h
        )));
    }

    let left = lanes.left.coordinates();
    let right = lanes.right.coordinates();
    if left.is_none() && right.is_none() {
        return Ok(frame.clone());
    }

    let mut overlay = ColorFrame::new(frame.w, frame.h);
    for coords in [left, right].into_iter().flatten() {
        draw_thick_segment(&mut overlay, &coords, params);
    }
    Ok(blend(frame, &overlay, params))
}

/// Rasterize a thick segment: every pixel whose center lies within half the
/// stroke thickness of the segment is painted.
fn draw_thick_segment(overlay: &mut ColorFrame, coords: &LaneCoordinates, params: &OverlayParams) {
    let radius = (params.thickness * 0.5).max(0.5);
    let a = coords.bottom;
    let b = coords.top;

    let x_min = (a.x.min(b.x) - radius).floor().max(0.0) as usize;
    let x_max = (a.x.max(b.x) + radius).ceil().min(overlay.w as f32 - 1.0) as isize;
    let y_min = (a.y.min(b.y) - radius).floor().max(0.0) as usize;
    let y_max = (a.y.max(b.y) + radius).ceil().min(overlay.h as f32 - 1.0) as isize;
    if x_max < x_min as isize || y_max < y_min as isize {
        return;
    }

    let ab = b - a;
    let len_sq = ab.norm_squared();
    for y in y_min..=y_max as usize {
        for x in x_min..=x_max as usize {
            let p = Point2::new(x as f32, y as f32);
            let t = if len_sq > 0.0 {
                ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let closest = a + ab * t;
            if (p - closest).norm_squared() <= radius * radius {
                overlay.set_pixel(x, y, params.color);
            }
        }
    }
}

/// Saturating weighted blend of two same-sized frames.
fn blend(src: &ColorFrame, overlay: &ColorFrame, params: &OverlayParams) -> ColorFrame {
    let mut out = ColorFrame::new(src.w, src.h);
    for ((o, &s), &v) in out.data.iter_mut().zip(&src.data).zip(&overlay.data) {
        let blended =
            params.src_weight * s as f32 + params.overlay_weight * v as f32 + params.bias;
        *o = blended.round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{classify_segments, ClassifyParams, FittedLine, LaneLine, LanePair};

    fn lane_with(frame_h: usize, fit: FittedLine) -> LaneLine {
        let mut lane = LaneLine::new(frame_h, ClassifyParams::default());
        lane.add(fit);
        lane
    }

    #[test]
    fn no_lanes_returns_the_frame_unchanged() {
        let mut frame = ColorFrame::new(64, 48);
        frame.set_pixel(10, 10, [12, 34, 56]);
        let pair = classify_segments(&[], 48, &ClassifyParams::default());
        let out = draw_lanes(&frame, &pair, &OverlayParams::default()).unwrap();
        assert_eq!(out, frame, "empty overlay must be the identity");
    }

    #[test]
    fn drawn_lane_leaves_green_pixels() {
        let frame = ColorFrame::new(200, 200);
        let pair = LanePair {
            left: lane_with(
                200,
                FittedLine {
                    slope: -2.0,
                    intercept: 400.0,
                },
            ),
            right: LaneLine::new(200, ClassifyParams::default()),
        };
        let out = draw_lanes(&frame, &pair, &OverlayParams::default()).unwrap();
        assert_eq!((out.w, out.h), (200, 200));
        // x = (y - 400) / -2, so y=199 -> x≈100.
        let px = out.pixel(100, 199);
        assert_eq!(px[1], 255, "stroke center must be fully green, got {px:?}");
        assert_eq!(px[0], 0);
    }

    #[test]
    fn blend_scales_the_source_under_the_stroke_region() {
        let mut frame = ColorFrame::new(100, 100);
        frame.data.fill(100);
        let pair = LanePair {
            left: LaneLine::new(100, ClassifyParams::default()),
            right: lane_with(
                100,
                FittedLine {
                    slope: 2.0,
                    intercept: -20.0,
                },
            ),
        };
        let out = draw_lanes(&frame, &pair, &OverlayParams::default()).unwrap();
        // Away from the stroke the source is scaled by 0.8.
        let far = out.pixel(5, 5);
        assert_eq!(far, [80, 80, 80]);
    }
}
