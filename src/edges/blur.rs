//! Separable Gaussian smoothing with border clamping.

use crate::image::{FloatFrame, ImageView, ImageViewMut};

/// Derive sigma from the kernel size the conventional way.
#[inline]
fn derived_sigma(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build normalized 1-D Gaussian taps for an odd kernel size.
fn gaussian_taps(ksize: usize, sigma: f32) -> Vec<f32> {
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        derived_sigma(ksize)
    };
    let center = (ksize / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = (i as isize - center) as f32;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Apply a `ksize × ksize` Gaussian blur as two 1-D passes.
///
/// A non-positive `sigma` derives one from the kernel size. Borders replicate
/// the nearest pixel. `ksize` is forced odd and at least 1; a kernel of 1 is
/// a copy.
pub fn gaussian_blur(src: &FloatFrame, ksize: usize, sigma: f32) -> FloatFrame {
    let ksize = if ksize % 2 == 0 { ksize + 1 } else { ksize.max(1) };
    if ksize == 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }

    let taps = gaussian_taps(ksize, sigma);
    let radius = ksize / 2;
    let w = src.w;
    let h = src.h;

    // Horizontal pass
    let mut tmp = FloatFrame::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let xx = (x + k).saturating_sub(radius).min(w - 1);
                acc += src_row[xx] * t;
            }
            dst_row[x] = acc;
        }
    }

    // Vertical pass
    let mut out = FloatFrame::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &t) in taps.iter().enumerate() {
            let yy = (y + k).saturating_sub(radius).min(h - 1);
            let src_row = tmp.row(yy);
            for x in 0..w {
                dst_row[x] += src_row[x] * t;
            }
        }
    }
    out
}
