//! Sobel image gradients with border clamping.

use crate::image::{FloatFrame, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: FloatFrame,
    /// Vertical derivative
    pub gy: FloatFrame,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: FloatFrame,
}

/// Compute Sobel gradients on a single-channel float frame.
///
/// Borders replicate the nearest pixel. Complexity O(W·H).
pub fn sobel_gradients(l: &FloatFrame) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = FloatFrame::new(w, h);
    let mut gy = FloatFrame::new(w, h);
    let mut mag = FloatFrame::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_taps = &SOBEL_KERNEL_X[ky];
                let ky_taps = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x_idx[0]] * kx_taps[0]
                    + row[x_idx[1]] * kx_taps[1]
                    + row[x_idx[2]] * kx_taps[2];
                sum_y += row[x_idx[0]] * ky_taps[0]
                    + row[x_idx[1]] * ky_taps[1]
                    + row[x_idx[2]] * ky_taps[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}
