use collinear_detector::config::detect;
use collinear_detector::io::read_points_file;
use collinear_detector::{CollinearDetector, Point, Segment};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;

    let points = read_points_file(&config.input).map_err(|e| e.to_string())?;
    let detector = CollinearDetector::new(config.to_params());

    let t0 = Instant::now();
    let result = detector.detect(&points).map_err(|e| e.to_string())?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    for segment in &result.segments {
        println!("{segment}");
    }
    println!(
        "{} segments from {} points ({:?}) in {elapsed_ms:.3} ms",
        result.segments.len(),
        points.len(),
        config.algorithm,
    );

    if let Some(report_path) = &config.segments_json {
        let report = DetectReport {
            points: &points,
            segments: &result.segments,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        fs::write(report_path, json)
            .map_err(|e| format!("Failed to write {}: {e}", report_path.display()))?;
        println!(
            "Saved {} segments to {}",
            result.segments.len(),
            report_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_segments <config.json>".to_string()
}

#[derive(Debug, Serialize)]
struct DetectReport<'a> {
    points: &'a [Point],
    segments: &'a [Segment],
}
