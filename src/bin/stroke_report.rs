use log::info;
use stroke_features::analyzer::{AnalyzerParams, BatchResult, StrokeAnalyzer};
use stroke_features::config::load_config;
use stroke_features::edges::canny;
use stroke_features::image::io::{
    debug_image_path, list_images, load_raster, save_grayscale_u8, write_json_file,
};
use stroke_features::image::ImageF32;
use stroke_features::normalize::normalize;
use std::env;
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
    let config = load_config(Path::new(&config_path))?;

    let paths = list_images(&config.input_dir, &config.extensions)
        .map_err(|e| format!("Failed to list {}: {e}", config.input_dir.display()))?;
    if paths.is_empty() {
        return Err(format!(
            "No images with extensions {:?} in {}",
            config.extensions,
            config.input_dir.display()
        ));
    }
    info!("analyzing {} images from {}", paths.len(), config.input_dir.display());

    let start = Instant::now();
    let analyzer = StrokeAnalyzer::new(config.analyzer.clone());
    let result: BatchResult = analyzer.analyze_files(&paths);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    write_json_file(&config.output.report_json, &result)?;
    println!(
        "Analyzed {} images ({} failed) in {:.1} ms; report saved to {}",
        result.len(),
        result.failures.len(),
        elapsed_ms,
        config.output.report_json.display()
    );

    if let Some(debug_dir) = &config.output.debug_dir {
        for path in &paths {
            save_debug_images(path, debug_dir, &config.analyzer)?;
        }
        println!("Saved masks and edge maps to {}", debug_dir.display());
    }

    Ok(())
}

/// Write `<stem>_mask.png` and `<stem>_edges.png` for one drawing.
fn save_debug_images(path: &Path, debug_dir: &Path, params: &AnalyzerParams) -> Result<(), String> {
    let owned = match load_raster(path) {
        Ok(owned) => owned,
        Err(err) => {
            eprintln!("Skipping debug images for {}: {err}", path.display());
            return Ok(());
        }
    };
    let raster = owned.as_raster().map_err(|e| e.to_string())?;
    let normalized = normalize(&raster, &params.normalize).map_err(|e| e.to_string())?;
    let (edges, _) = canny(
        &ImageF32::from_u8(&normalized.gray),
        params.continuity.canny_low,
        params.continuity.canny_high,
    );

    let mask_path = debug_image_path(debug_dir, path, "mask");
    let edges_path = debug_image_path(debug_dir, path, "edges");
    save_grayscale_u8(&normalized.mask.to_gray(), &mask_path)?;
    save_grayscale_u8(&edges.to_gray(), &edges_path)?;
    Ok(())
}

fn usage() -> String {
    "Usage: stroke_report <config.json>".to_string()
}
