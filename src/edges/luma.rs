//! Color → luma conversion (BT.601 weights).

use crate::image::color::{ColorOrder, CHANNELS};
use crate::image::{ColorFrame, FloatFrame, ImageViewMut};

const WR: f32 = 0.299;
const WG: f32 = 0.587;
const WB: f32 = 0.114;

/// Convert an interleaved color frame to a single-channel luma frame in
/// [0, 255]. The channel order decides which interleaved byte is red.
pub fn color_to_luma(frame: &ColorFrame, order: ColorOrder) -> FloatFrame {
    let (ri, bi) = match order {
        ColorOrder::Bgr => (2usize, 0usize),
        ColorOrder::Rgb => (0usize, 2usize),
    };

    let mut luma = FloatFrame::new(frame.w, frame.h);
    for y in 0..frame.h {
        let src = frame.row(y);
        let dst = luma.row_mut(y);
        for (x, px) in src.chunks_exact(CHANNELS).enumerate() {
            dst[x] = WR * px[ri] as f32 + WG * px[1] as f32 + WB * px[bi] as f32;
        }
    }
    luma
}
