use lane_detector::image::io::{
    load_color_frame, save_color_frame, save_gray_frame, write_json_file,
};
use lane_detector::lanes::LaneCoordinates;
use lane_detector::types::OutputFrame;
use lane_detector::{LaneDetector, LaneParams};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    pub output: LaneDemoOutput,
}

#[derive(Debug, Deserialize)]
pub struct LaneDemoOutput {
    pub frame_image: PathBuf,
    pub lanes_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let order = config.params.edges.color_order;
    let frame = load_color_frame(&config.input, order).map_err(|e| e.to_string())?;

    let detector = LaneDetector::new(config.params);
    let report = detector.process(&frame).map_err(|e| e.to_string())?;

    match &report.output {
        OutputFrame::Edges(f) | OutputFrame::Masked(f) => {
            save_gray_frame(f, &config.output.frame_image).map_err(|e| e.to_string())?;
        }
        OutputFrame::Annotated(f) => {
            save_color_frame(f, order, &config.output.frame_image).map_err(|e| e.to_string())?;
        }
    }

    let summary = LaneSummary {
        width: frame.w,
        height: frame.h,
        segment_count: report.segment_count,
        left: report.lanes.left.coordinates(),
        right: report.lanes.right.coordinates(),
        latency_ms: report.latency_ms,
    };
    write_json_file(&config.output.lanes_json, &summary).map_err(|e| e.to_string())?;

    println!(
        "Saved output frame to {} and lane summary to {}",
        config.output.frame_image.display(),
        config.output.lanes_json.display()
    );
    println!(
        "segments={} left={} right={} latency_ms={:.3}",
        summary.segment_count,
        summary.left.is_some(),
        summary.right.is_some(),
        summary.latency_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LaneSummary {
    width: usize,
    height: usize,
    segment_count: usize,
    left: Option<LaneCoordinates>,
    right: Option<LaneCoordinates>,
    latency_ms: f64,
}
