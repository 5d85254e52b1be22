//! Canny edge detection: non-maximum suppression plus hysteresis.
//!
//! Non-maximum suppression compares each pixel's gradient magnitude against
//! its two neighbors along the quantized gradient direction (4 sectors,
//! selected with the tan 22.5° test). Hysteresis then keeps pixels above the
//! high threshold and floods through 8-connected pixels above the low
//! threshold, so weak edges survive only when attached to a strong one.
//!
//! The outermost 1-pixel border is ignored during suppression to keep
//! neighbor lookups in bounds.

use super::grad::{sobel_gradients, Grad};
use crate::image::{FloatFrame, GrayFrame, ImageView};

const TAN_22_5_DEG: f32 = 0.41421356237;

const STATUS_NONE: u8 = 0;
const STATUS_WEAK: u8 = 1;
const STATUS_STRONG: u8 = 2;

/// Detect edges on a smoothed luma frame.
///
/// Returns a binary edge map: 255 for edge pixels, 0 elsewhere, same
/// dimensions as the input.
pub fn canny(l: &FloatFrame, low: f32, high: f32) -> GrayFrame {
    let grad = sobel_gradients(l);
    let suppressed = suppress_non_maxima(&grad, low);
    hysteresis(&suppressed, low, high)
}

/// Zero out magnitudes that are not a local maximum along the gradient
/// direction. Values below `low` are dropped early since hysteresis would
/// discard them anyway.
fn suppress_non_maxima(grad: &Grad, low: f32) -> FloatFrame {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = FloatFrame::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag >= neighbor1 && mag > neighbor2 {
                out.set(x, y, mag);
            }
        }
    }
    out
}

/// Double-threshold hysteresis over the suppressed magnitudes.
fn hysteresis(suppressed: &FloatFrame, low: f32, high: f32) -> GrayFrame {
    let w = suppressed.w;
    let h = suppressed.h;
    let mut status = vec![STATUS_NONE; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(256);

    for (idx, &mag) in suppressed.data.iter().enumerate() {
        if mag >= high {
            status[idx] = STATUS_STRONG;
            stack.push(idx);
        } else if mag >= low && mag > 0.0 {
            status[idx] = STATUS_WEAK;
        }
    }

    // Flood from strong pixels through connected weak ones.
    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let xn = x as i32 + dx;
                let yn = y as i32 + dy;
                if xn < 0 || yn < 0 || xn >= w as i32 || yn >= h as i32 {
                    continue;
                }
                let nidx = yn as usize * w + xn as usize;
                if status[nidx] == STATUS_WEAK {
                    status[nidx] = STATUS_STRONG;
                    stack.push(nidx);
                }
            }
        }
    }

    let mut edges = GrayFrame::new(w, h);
    for (out, &s) in edges.data.iter_mut().zip(status.iter()) {
        if s == STATUS_STRONG {
            *out = 255;
        }
    }
    edges
}
