//! Error types for the lane-detection pipeline.
//!
//! Only unrecoverable conditions surface here. Per-segment problems (a
//! vertical segment that cannot be fitted) are logged and skipped inside the
//! classifier, and "no lane found on a side" is an ordinary result, not an
//! error.

use thiserror::Error;

/// Pipeline error type.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input frame is empty or has a zero dimension.
    #[error("invalid input frame: {0}")]
    InvalidFrame(String),

    /// A stage produced an output whose dimensions do not match its input.
    /// Should never occur with correct parameterization; guards against
    /// silent buffer corruption.
    #[error("stage contract violation in {stage}: expected {expected_w}x{expected_h}, got {got_w}x{got_h}")]
    StageContractViolation {
        stage: &'static str,
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },

    /// I/O or codec failure in the demo tools.
    #[error("image i/o error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
