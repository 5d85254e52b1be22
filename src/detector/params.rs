//! Parameter types configuring the pipeline stages.
//!
//! Every knob of the pipeline lives here as an explicit, overridable value;
//! nothing is an embedded literal inside a stage. Defaults reproduce the
//! historical mobile pipeline: BGR capture, 5×5 Gaussian, Canny 50/150, the
//! fixed-mount road trapezoid, Hough 1 px / 1° / 20 votes / 20 px / 30 px
//! gap, last-only lane reduction, green 5 px overlay at 0.8/1.0 blend.

use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use crate::lanes::ClassifyParams;
use crate::overlay::OverlayParams;
use crate::roi::RoiParams;
use serde::Deserialize;

/// Which stage's output the pipeline hands back to the display collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStage {
    /// Raw binary edge map (what the historical pipeline displayed).
    Edges,
    /// Edge map after region-of-interest masking.
    Masked,
    /// Original frame with the lane overlay.
    #[default]
    Annotated,
}

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    pub edges: EdgeParams,
    pub roi: RoiParams,
    pub hough: HoughParams,
    pub classify: ClassifyParams,
    pub overlay: OverlayParams,
    /// Pipeline endpoint returned in the report.
    pub output_stage: OutputStage,
}
