use line_detector::config::{load_config, LineToolConfig};
use line_detector::diagnostics::DetectionReport;
use line_detector::image::io::{load_grayscale_image, save_frame, save_overlay, write_json_file};
use line_detector::LineDetector;
use log::info;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

const FPS_REPORT_INTERVAL: usize = 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))
        .map_err(|e| format!("Failed to load config {config_path}: {e}"))?;
    let frames = config.frame_paths().map_err(|e| e.to_string())?;
    if frames.is_empty() {
        return Err(format!("No frames found in {}", config.input.display()));
    }

    let mut detector = LineDetector::new(config.detector.clone()).map_err(|e| e.to_string())?;
    let mut summary = RunSummary {
        frames: Vec::with_capacity(frames.len()),
        total_ms: 0.0,
    };
    let mut window_start = Instant::now();

    for (index, path) in frames.iter().enumerate() {
        let gray = load_grayscale_image(path).map_err(|e| format!("{}: {e}", path.display()))?;
        let report = detector.process(gray.as_view()).map_err(|e| e.to_string())?;
        save_outputs(&config, path, &gray, &detector)?;

        let processed = index + 1;
        if processed % FPS_REPORT_INTERVAL == 0 {
            let fps = FPS_REPORT_INTERVAL as f64 / window_start.elapsed().as_secs_f64();
            info!(
                "{processed} frames, {fps:.1} fps, last frame {:.2} ms",
                report.timings.total_ms
            );
            window_start = Instant::now();
        }

        summary.total_ms += report.timings.total_ms;
        summary.frames.push(FrameSummary {
            path: path.clone(),
            report,
        });
    }

    if let Some(last) = summary.frames.last() {
        println!("{}", last.report.summary());
    }
    println!(
        "Processed {} frame(s) in {:.2} ms ({:.2} ms/frame)",
        summary.frames.len(),
        summary.total_ms,
        summary.total_ms / summary.frames.len() as f64
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary).map_err(|e| e.to_string())?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn save_outputs(
    config: &LineToolConfig,
    input: &Path,
    gray: &line_detector::Frame,
    detector: &LineDetector,
) -> Result<(), String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let out = &config.output;
    let target = |suffix: &str| out.dir.join(format!("{stem}_{suffix}.png"));

    if out.save_edges {
        save_frame(detector.edges(), &target("edges")).map_err(|e| e.to_string())?;
    }
    if out.save_lines {
        save_frame(detector.overlay(), &target("lines")).map_err(|e| e.to_string())?;
    }
    if out.save_overlay {
        save_overlay(gray, detector.overlay(), &target("overlay")).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: line_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    frames: Vec<FrameSummary>,
    total_ms: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSummary {
    path: PathBuf,
    report: DetectionReport,
}
