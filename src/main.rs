use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use lane_detector::config::{load_config, RunConfig};
use lane_detector::image::{Image, Pixel};
use lane_detector::{codec, LaneDetector, LaneParams};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_demo(),
        2 => load_config(Path::new(&args[1])).and_then(run_config),
        _ => Err(format!("usage: {} [config.json]", args[0])),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the detector over a synthetic two-lane road scene.
fn run_demo() -> Result<(), String> {
    let mut image = Image::new(640, 480);
    image.fill_solid(Pixel::splat(40));
    // Two markings converging towards a vanishing point above the frame.
    image.draw_line(Pixel::splat(235), 140, 479, 290, 0);
    image.draw_line(Pixel::splat(235), 500, 479, 350, 0);

    let detector = LaneDetector::new(LaneParams {
        vote_threshold: 120,
        ..Default::default()
    });
    let report = detector.process(&image).map_err(|e| e.to_string())?;

    println!(
        "candidates={} lanes={} total_ms={:.3}",
        report.candidates,
        report.lanes.len(),
        report.timing.total_ms
    );
    for (medoid, lane) in report.medoids.iter().zip(&report.lanes) {
        println!(
            "  theta={} rho={} members={} -> ({},{})..({},{})",
            medoid.line.theta, medoid.line.rho, medoid.members, lane.x1, lane.y1, lane.x2, lane.y2
        );
    }
    Ok(())
}

/// Runs the detector over the configured PPM and writes the outputs.
fn run_config(cfg: RunConfig) -> Result<(), String> {
    let bytes = fs::read(&cfg.input)
        .map_err(|e| format!("Failed to read {}: {e}", cfg.input.display()))?;
    let image = codec::decode(&bytes)
        .map_err(|e| format!("Failed to decode {}: {e}", cfg.input.display()))?;

    let mut params = cfg.params;
    if cfg.output.accumulator.is_some() {
        params.render_accumulator = true;
    }

    let report = LaneDetector::new(params)
        .process(&image)
        .map_err(|e| e.to_string())?;

    write_ppm(&cfg.output.overlay, &report.overlay)?;
    if let Some(path) = &cfg.output.accumulator {
        let graph = report
            .accumulator
            .as_ref()
            .ok_or_else(|| "accumulator rendering missing from report".to_string())?;
        write_ppm(path, graph)?;
    }
    if let Some(path) = &cfg.output.report {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }

    println!(
        "candidates={} lanes={} total_ms={:.3}",
        report.candidates,
        report.lanes.len(),
        report.timing.total_ms
    );
    Ok(())
}

fn write_ppm(path: &Path, image: &Image) -> Result<(), String> {
    fs::write(path, codec::encode(image))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
