//! # DR Screen
//!
//! A Rust library that screens retinal fundus photographs for diabetic
//! retinopathy using a pretrained ONNX classifier.
//!
//! ## Features
//!
//! - Model resolution from a short list of candidate paths, memoized for the
//!   process lifetime
//! - Fixed preprocessing contract: RGB coercion, Lanczos resize to 224x224,
//!   NHWC float tensor
//! - Single-image screening with a fixed 0.5 decision threshold
//! - Sequential batch screening with per-image failure isolation and
//!   aggregate statistics
//! - Plain-text report and batch CSV export artifacts
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, metadata, model resolution, ONNX
//!   inference
//! * [`domain`] - Decision rule, batch records and summaries, report
//!   rendering
//! * [`models`] - The EfficientNet screening model
//! * [`pipeline`] - The [`pipeline::DrScreener`] facade
//! * [`processors`] - Image preprocessing and normalization
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dr_screen::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let screener = DrScreener::from_default_locations()?;
//! let prediction = screener.predict_path(Path::new("fundus.jpg"))?;
//! println!("{} ({})", prediction.label, prediction.confidence_percent());
//!
//! let report = render_report(&prediction, screener.metadata());
//! std::fs::write(report_filename("fundus.jpg"), report)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use dr_screen::prelude::*;
/// ```
pub mod prelude {
    // Pipeline facade (essential)
    pub use crate::pipeline::{describe_image, DrScreener, ImageDetails};

    // Screening outcomes and reports
    pub use crate::domain::{
        decide, render_batch_csv, render_report, report_filename, BatchRecord, BatchStatus,
        BatchSummary, DrLabel, Prediction, BATCH_EXPORT_FILENAME,
    };

    // Error handling and configuration (essential)
    pub use crate::core::{
        init_tracing, DrError, DrResult, ModelMetadata, ProbabilityModel, ResolverConfig,
    };

    // Image loading (minimal)
    pub use crate::utils::load_image;
}
