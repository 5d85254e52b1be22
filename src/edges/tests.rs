use super::*;
use crate::image::color::CHANNELS;
use crate::image::{ColorFrame, FloatFrame};

fn vertical_step_frame(width: usize, height: usize, split_x: usize) -> ColorFrame {
    let mut frame = ColorFrame::new(width, height);
    for y in 0..height {
        for x in split_x..width {
            frame.set_pixel(x, y, [255; CHANNELS]);
        }
    }
    frame
}

#[test]
fn extract_edges_keeps_dimensions_and_is_single_channel() {
    let frame = vertical_step_frame(64, 48, 32);
    let edges = extract_edges(&frame, &EdgeParams::default()).unwrap();
    assert_eq!((edges.w, edges.h), (64, 48));
    assert_eq!(edges.data.len(), 64 * 48);
}

#[test]
fn extract_edges_output_is_binary() {
    let frame = vertical_step_frame(64, 48, 32);
    let edges = extract_edges(&frame, &EdgeParams::default()).unwrap();
    assert!(
        edges.data.iter().all(|&v| v == 0 || v == 255),
        "edge map must contain only 0 and 255"
    );
}

#[test]
fn step_edge_is_detected_near_the_split() {
    let frame = vertical_step_frame(64, 48, 32);
    let edges = extract_edges(&frame, &EdgeParams::default()).unwrap();
    let mid_row = 24usize;
    let hits = (28..36).filter(|&x| edges.get(x, mid_row) != 0).count();
    assert!(
        hits >= 1,
        "expected an edge response around x=32 in row {mid_row}"
    );
}

#[test]
fn flat_frame_has_no_edges() {
    let frame = ColorFrame::new(32, 32);
    let edges = extract_edges(&frame, &EdgeParams::default()).unwrap();
    assert!(
        edges.data.iter().all(|&v| v == 0),
        "a flat frame must produce an empty edge map"
    );
}

#[test]
fn empty_frame_is_rejected() {
    let frame = ColorFrame::new(0, 0);
    let err = extract_edges(&frame, &EdgeParams::default()).unwrap_err();
    assert!(matches!(err, crate::error::PipelineError::InvalidFrame(_)));
}

#[test]
fn luma_weights_respect_channel_order() {
    let mut frame = ColorFrame::new(1, 1);
    // Pure red pixel stored in BGR order.
    frame.set_pixel(0, 0, [0, 0, 255]);
    let as_bgr = color_to_luma(&frame, crate::image::color::ColorOrder::Bgr);
    let as_rgb = color_to_luma(&frame, crate::image::color::ColorOrder::Rgb);
    assert!((as_bgr.get(0, 0) - 0.299 * 255.0).abs() < 0.5);
    assert!((as_rgb.get(0, 0) - 0.114 * 255.0).abs() < 0.5);
}

#[test]
fn gaussian_blur_preserves_constant_frames() {
    let mut img = FloatFrame::new(16, 16);
    img.data.fill(100.0);
    let blurred = gaussian_blur(&img, 5, 0.0);
    for &v in &blurred.data {
        assert!(
            (v - 100.0).abs() < 1e-3,
            "blur of a constant frame must stay constant, got {v}"
        );
    }
}
