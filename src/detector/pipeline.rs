//! The main [`LaneDetector`] implementation.

use super::params::{LaneParams, OutputStage};
use crate::edges::extract_edges;
use crate::error::{PipelineError, Result};
use crate::hough::detect_segments;
use crate::image::ColorFrame;
use crate::lanes::classify_segments;
use crate::overlay::draw_lanes;
use crate::roi::mask_region;
use crate::types::{LaneReport, OutputFrame};
use log::debug;
use std::time::Instant;

/// Per-frame lane detector. Holds configuration only; all per-frame state is
/// created fresh inside [`process`](LaneDetector::process) and discarded with
/// the report.
#[derive(Clone, Debug)]
pub struct LaneDetector {
    params: LaneParams,
}

impl LaneDetector {
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Run the pipeline over one capture frame.
    ///
    /// Fails fast on an empty frame (`InvalidFrame`). A stage output whose
    /// dimensions disagree with the input is a fatal
    /// `StageContractViolation`; it should never occur with correct
    /// parameterization and guards against silent corruption.
    pub fn process(&self, frame: &ColorFrame) -> Result<LaneReport> {
        if frame.is_empty() {
            return Err(PipelineError::InvalidFrame(format!(
                "pipeline needs a non-empty frame, got {}x{}",
                frame.w, frame.h
            )));
        }
        let start = Instant::now();

        let edges = extract_edges(frame, &self.params.edges)?;
        check_dims("edge extraction", frame.w, frame.h, edges.w, edges.h)?;

        let masked = mask_region(&edges, &self.params.roi)?;
        check_dims("region masking", frame.w, frame.h, masked.w, masked.h)?;

        let segments = detect_segments(&masked, &self.params.hough);
        let lanes = classify_segments(&segments, frame.h, &self.params.classify);
        debug!(
            "process: {} segments, left={} right={}",
            segments.len(),
            lanes.left.coordinates().is_some(),
            lanes.right.coordinates().is_some()
        );

        let output = match self.params.output_stage {
            OutputStage::Edges => OutputFrame::Edges(edges),
            OutputStage::Masked => OutputFrame::Masked(masked),
            OutputStage::Annotated => {
                let annotated = draw_lanes(frame, &lanes, &self.params.overlay)?;
                check_dims("overlay", frame.w, frame.h, annotated.w, annotated.h)?;
                OutputFrame::Annotated(annotated)
            }
        };

        Ok(LaneReport {
            output,
            lanes,
            segment_count: segments.len(),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

fn check_dims(
    stage: &'static str,
    expected_w: usize,
    expected_h: usize,
    got_w: usize,
    got_h: usize,
) -> Result<()> {
    if expected_w != got_w || expected_h != got_h {
        return Err(PipelineError::StageContractViolation {
            stage,
            expected_w,
            expected_h,
            got_w,
            got_h,
        });
    }
    Ok(())
}
