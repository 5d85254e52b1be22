use super::*;
use crate::image::GrayFrame;

/// Rasterize a straight line with the given half-thickness into a binary map.
fn draw_line(map: &mut GrayFrame, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = dx.abs().max(dy.abs()).max(1);
    for i in 0..=steps {
        let x = x0 + dx * i / steps;
        let y = y0 + dy * i / steps;
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && (px as usize) < map.w && (py as usize) < map.h {
                    map.set(px as usize, py as usize, 255);
                }
            }
        }
    }
}

#[test]
fn empty_edge_map_yields_no_segments() {
    let map = GrayFrame::new(320, 240);
    let segments = detect_segments(&map, &HoughParams::default());
    assert!(
        segments.is_empty(),
        "no edge pixels must mean no segments, got {}",
        segments.len()
    );
}

#[test]
fn vertical_line_is_recovered() {
    let mut map = GrayFrame::new(200, 200);
    draw_line(&mut map, 80, 20, 80, 180, 1);
    let segments = detect_segments(&map, &HoughParams::default());
    assert!(!segments.is_empty(), "expected at least one segment");
    let longest = segments
        .iter()
        .max_by(|a, b| a.length().partial_cmp(&b.length()).unwrap())
        .unwrap();
    assert!(
        longest.length() >= 80.0,
        "expected a long vertical segment, got len={}",
        longest.length()
    );
    let dx = (longest.p1.x - longest.p0.x).abs();
    let dy = (longest.p1.y - longest.p0.y).abs();
    assert!(dy > dx, "expected vertical orientation, got dx={dx} dy={dy}");
    assert!(
        (longest.p0.x - 80.0).abs() <= 3.0 && (longest.p1.x - 80.0).abs() <= 3.0,
        "segment should stay near x=80: {longest:?}"
    );
}

#[test]
fn diagonal_line_is_recovered() {
    let mut map = GrayFrame::new(200, 200);
    draw_line(&mut map, 30, 170, 160, 40, 1);
    let segments = detect_segments(&map, &HoughParams::default());
    assert!(!segments.is_empty(), "expected at least one segment");
    let longest = segments
        .iter()
        .max_by(|a, b| a.length().partial_cmp(&b.length()).unwrap())
        .unwrap();
    assert!(
        longest.length() >= 90.0,
        "expected most of the diagonal, got len={}",
        longest.length()
    );
}

#[test]
fn speckle_below_vote_threshold_is_ignored() {
    let mut map = GrayFrame::new(100, 100);
    // Ten isolated pixels can never reach the 20-vote threshold.
    for i in 0..10 {
        map.set(7 + i * 9, (i * 13 + 3) % 100, 255);
    }
    let segments = detect_segments(&map, &HoughParams::default());
    assert!(
        segments.is_empty(),
        "scattered speckle must not produce segments, got {segments:?}"
    );
}

#[test]
fn detection_is_deterministic_for_a_fixed_seed() {
    let mut map = GrayFrame::new(200, 200);
    draw_line(&mut map, 80, 20, 80, 180, 1);
    draw_line(&mut map, 20, 150, 180, 150, 1);
    let params = HoughParams::default();
    let a = detect_segments(&map, &params);
    let b = detect_segments(&map, &params);
    assert_eq!(a.len(), b.len());
    for (s, t) in a.iter().zip(&b) {
        assert_eq!((s.p0, s.p1), (t.p0, t.p1));
    }
}
