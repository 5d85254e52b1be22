//! Row-oriented access traits shared by the frame buffer types.

/// Read-only access to a single-channel, row-major image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Elements between consecutive rows.
    fn stride(&self) -> usize;
    /// One row, `width` elements long.
    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Contiguous backing slice when `stride == width`.
    fn as_slice(&self) -> Option<&[Self::Pixel]>;

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Mutable counterpart of [`ImageView`].
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
    fn as_mut_slice(&mut self) -> Option<&mut [Self::Pixel]>;
}
