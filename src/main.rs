use lane_detector::prelude::*;

fn main() {
    // Demo stub: runs the pipeline over a fake black capture frame
    let frame = ColorFrame::new(640, 480);

    let detector = LaneDetector::new(LaneParams::default());
    match detector.process(&frame) {
        Ok(report) => println!(
            "segments={} left={} right={} latency_ms={:.3}",
            report.segment_count,
            report.lanes.left.coordinates().is_some(),
            report.lanes.right.coordinates().is_some(),
            report.latency_ms
        ),
        Err(err) => eprintln!("pipeline failed: {err}"),
    }
}
