//! In-memory frame buffers used by the pipeline.
//!
//! Every stage consumes and produces one of these owned buffers; nothing is
//! mutated in place across stage boundaries, which keeps the pipeline
//! composable and testable. The `image` crate is confined to [`io`] so stage
//! code never touches codec types.

pub mod color;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::color::ColorFrame;
pub use self::f32::FloatFrame;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::GrayFrame;
