//! Owned single-channel 8-bit frame in row-major layout (stride == width).
//!
//! Used for grayscale intermediates, binary edge maps, and region masks.
//! Edge maps are binary by convention: edge pixels hold 255, the rest 0.

use crate::image::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayFrame {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Backing storage, `w * h` bytes in row-major order
    pub data: Vec<u8>,
}

impl GrayFrame {
    /// Construct a zero-filled frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Panics if the length disagrees
    /// with the dimensions.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must equal w*h");
        Self { w, h, data }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for GrayFrame {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for GrayFrame {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.data)
    }
}
