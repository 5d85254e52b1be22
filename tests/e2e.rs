mod common;

use common::synthetic_image::{draw_color_line, draw_gray_line};
use lane_detector::hough::{detect_segments, HoughParams};
use lane_detector::image::{ColorFrame, GrayFrame};
use lane_detector::lanes::{classify_segments, ClassifyParams};
use lane_detector::types::OutputFrame;
use lane_detector::{LaneDetector, LaneParams, OutputStage};

#[test]
fn two_synthetic_lines_classify_one_per_side() {
    // 640x480 edge map with one negative-slope line on the left half and one
    // positive-slope line on the right half.
    let mut map = GrayFrame::new(640, 480);
    draw_gray_line(&mut map, 60, 400, 100, 250, 1); // slope -3.75
    draw_gray_line(&mut map, 540, 400, 500, 250, 1); // slope +3.75

    let segments = detect_segments(&map, &HoughParams::default());
    assert!(
        segments.len() >= 2,
        "expected both synthetic lines, got {} segments",
        segments.len()
    );

    let pair = classify_segments(&segments, 480, &ClassifyParams::default());
    assert!(pair.left.fit_count() >= 1, "left line missing");
    assert!(pair.right.fit_count() >= 1, "right line missing");

    let left_fit = pair.left.reduced_fit().unwrap();
    assert!(
        (left_fit.slope + 3.75).abs() < 0.8,
        "left slope should be near -3.75, got {}",
        left_fit.slope
    );
    let right_fit = pair.right.reduced_fit().unwrap();
    assert!(
        (right_fit.slope - 3.75).abs() < 0.8,
        "right slope should be near +3.75, got {}",
        right_fit.slope
    );

    // Representative endpoints derive from the reduced fit (last-only with a
    // single contributing segment per side).
    let left = pair.left.coordinates().unwrap();
    assert_eq!(left.bottom.y, 479.0);
    let expected_x = (479.0 - left_fit.intercept) / left_fit.slope;
    assert!(
        (left.bottom.x - expected_x).abs() < 1e-3,
        "left bottom endpoint must follow the fit"
    );
    let right = pair.right.coordinates().unwrap();
    assert!(
        right.bottom.x > left.bottom.x,
        "right lane must anchor to the right of the left lane"
    );
}

#[test]
fn full_pipeline_detects_painted_lane_markings() {
    // Bright strokes on dark asphalt, placed inside the default trapezoid.
    let mut frame = ColorFrame::new(640, 480);
    draw_color_line(&mut frame, 100, 460, 250, 250, 2); // left, slope -1.4
    draw_color_line(&mut frame, 500, 460, 380, 250, 2); // right, slope +1.75

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.process(&frame).expect("valid frame");

    assert!(
        report.segment_count >= 2,
        "expected segments from both markings, got {}",
        report.segment_count
    );
    let left = report.lanes.left.coordinates().expect("left lane");
    let right = report.lanes.right.coordinates().expect("right lane");
    assert!(
        left.bottom.x < right.bottom.x,
        "lane sides must not be swapped: left={left:?} right={right:?}"
    );

    match &report.output {
        OutputFrame::Annotated(annotated) => {
            assert_eq!((annotated.w, annotated.h), (frame.w, frame.h));
        }
        other => panic!("default endpoint must be the annotated frame, got {other:?}"),
    }
    assert!(report.latency_ms >= 0.0);
}

#[test]
fn blank_frame_reports_no_lanes_and_identity_output() {
    let frame = ColorFrame::new(640, 480);
    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.process(&frame).expect("valid frame");

    assert_eq!(report.segment_count, 0);
    assert!(report.lanes.left.coordinates().is_none());
    assert!(report.lanes.right.coordinates().is_none());
    match &report.output {
        OutputFrame::Annotated(annotated) => {
            assert_eq!(annotated, &frame, "empty overlay must return the frame unchanged");
        }
        other => panic!("unexpected output stage {other:?}"),
    }
}

#[test]
fn edge_endpoint_returns_the_edge_map() {
    let mut frame = ColorFrame::new(320, 240);
    draw_color_line(&mut frame, 60, 230, 140, 120, 2);

    let params = LaneParams {
        output_stage: OutputStage::Edges,
        ..Default::default()
    };
    let report = LaneDetector::new(params).process(&frame).expect("valid frame");
    match &report.output {
        OutputFrame::Edges(edges) => {
            assert_eq!((edges.w, edges.h), (320, 240));
            assert!(
                edges.data.iter().any(|&v| v != 0),
                "the painted stroke must leave edge pixels"
            );
        }
        other => panic!("expected the edge map, got {other:?}"),
    }
}

#[test]
fn empty_frame_is_rejected_up_front() {
    let detector = LaneDetector::new(LaneParams::default());
    let err = detector.process(&ColorFrame::new(0, 0)).unwrap_err();
    assert!(matches!(
        err,
        lane_detector::PipelineError::InvalidFrame(_)
    ));
}
