//! Single-Image Screening Example
//!
//! Screens one retinal fundus photograph for diabetic retinopathy and writes
//! the plain-text report next to the working directory.
//!
//! Usage:
//! ```
//! cargo run --example analyze_image -- <image_path>
//! ```
//!
//! By default the model is resolved from the built-in candidate locations
//! (`models/best_model.onnx`, ...). Pass `--config <resolver.json>` to search
//! custom locations instead.

use clap::Parser;
use dr_screen::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Command-line arguments for the single-image screening example
#[derive(Parser)]
#[command(name = "analyze_image")]
#[command(about = "Screens a retinal fundus image for diabetic retinopathy")]
struct Args {
    /// Image file to analyze
    image: PathBuf,

    /// Optional resolver configuration (JSON with candidate path lists)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the text report is written to
    #[arg(short, long, default_value = ".")]
    report_dir: PathBuf,
}

fn run(screener: &DrScreener<impl ProbabilityModel>, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = screener.metadata();
    info!(
        "Model: {} | accuracy {} | AUC {}",
        metadata.architecture,
        metadata.accuracy_percent(),
        metadata.auc_display()
    );

    if !args.image.exists() {
        error!("Image file not found: {}", args.image.display());
        return Err("image file not found".into());
    }

    let image = image::open(&args.image)?;
    let details = describe_image(&image);
    info!(
        "Image: {} x {} pixels, {}",
        details.width, details.height, details.color_type
    );

    let prediction = screener.predict(&image)?;
    if prediction.label.is_positive() {
        info!(
            "DIABETIC RETINOPATHY DETECTED (confidence {})",
            prediction.confidence_percent()
        );
        info!("Action required: please consult an ophthalmologist for professional evaluation.");
    } else {
        info!(
            "No diabetic retinopathy detected (confidence {})",
            prediction.confidence_percent()
        );
    }

    let report = render_report(&prediction, metadata);
    let original_name = args
        .image
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let report_path = args.report_dir.join(report_filename(original_name));
    std::fs::write(&report_path, report)?;
    info!("Report written to {}", report_path.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    match &args.config {
        Some(config_path) => {
            let config = ResolverConfig::from_json_file(config_path)?;
            let screener = DrScreener::from_config(&config).map_err(print_model_help)?;
            run(&screener, &args)
        }
        None => {
            let screener = DrScreener::global().map_err(print_model_help)?;
            run(&screener, &args)
        }
    }
}

fn print_model_help(error: DrError) -> DrError {
    error!("{error}");
    error!("Place best_model.onnx (and optionally metadata.json) under models/ and restart.");
    error
}
