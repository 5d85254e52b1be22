//! Owned interleaved 3-channel 8-bit frame.
//!
//! The channel order (BGR vs RGB) is not encoded in the buffer; it is a
//! startup assumption about the capture device, carried as [`ColorOrder`] in
//! the edge-extraction parameters. The default capture format is BGR.

use serde::{Deserialize, Serialize};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFrame {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Interleaved storage, `w * h * CHANNELS` bytes in row-major order
    pub data: Vec<u8>,
}

impl ColorFrame {
    /// Construct a zero-filled (black) frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * CHANNELS],
        }
    }

    /// Wrap an existing interleaved buffer. Panics if the length disagrees
    /// with the dimensions.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            w * h * CHANNELS,
            "buffer length must equal w*h*{CHANNELS}"
        );
        Self { w, h, data }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; CHANNELS]) {
        let i = self.idx(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// One interleaved row, `w * CHANNELS` bytes long.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }
}

/// Channel order of the interleaved capture buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOrder {
    /// Blue, green, red, the usual camera-capture order.
    #[default]
    Bgr,
    /// Red, green, blue.
    Rgb,
}
