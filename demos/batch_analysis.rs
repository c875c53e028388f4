//! Batch Screening Example
//!
//! Screens a set of retinal fundus photographs, prints per-file results and
//! summary statistics, and writes `batch_dr_analysis.csv`.
//!
//! Usage:
//! ```
//! cargo run --example batch_analysis -- <image_paths>...
//! ```

use clap::Parser;
use dr_screen::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Command-line arguments for the batch screening example
#[derive(Parser)]
#[command(name = "batch_analysis")]
#[command(about = "Screens a set of retinal fundus images and writes the batch CSV export")]
struct Args {
    /// Image files to process
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Optional resolver configuration (JSON with candidate path lists)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the CSV export is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn run(screener: &DrScreener<impl ProbabilityModel>, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!("{} images queued for screening", args.images.len());

    let (records, summary) =
        screener.process_batch_paths_with_progress(&args.images, |done, total, name| {
            info!("Processing {done}/{total}: {name}");
        });

    for record in &records {
        info!(
            "{:<32} {:<26} {:>8}  {}",
            record.filename, record.prediction, record.confidence, record.status
        );
    }

    info!("Total images: {}", summary.total);
    info!(
        "DR detected: {} ({:.0}%)",
        summary.dr_detected,
        summary.detection_rate()
    );
    info!("No DR: {} ({:.0}%)", summary.no_dr, summary.clear_rate());
    info!("Failed: {}", summary.failed);

    let csv = render_batch_csv(&records)?;
    let csv_path = args.output_dir.join(BATCH_EXPORT_FILENAME);
    std::fs::write(&csv_path, csv)?;
    info!("Batch results written to {}", csv_path.display());

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
