//! Owned single-channel f32 frame for numeric intermediates (blur output,
//! gradient magnitudes). Values stay in the 8-bit intensity range [0, 255]
//! so Canny thresholds keep their conventional units.

use crate::image::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct FloatFrame {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl FloatFrame {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Widen an 8-bit frame into f32 without rescaling.
    pub fn from_gray(gray: &crate::image::GrayFrame) -> Self {
        Self {
            w: gray.w,
            h: gray.h,
            data: gray.data.iter().map(|&v| v as f32).collect(),
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for FloatFrame {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        Some(&self.data)
    }
}

impl ImageViewMut for FloatFrame {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        Some(&mut self.data)
    }
}
