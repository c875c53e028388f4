//! The core module of the screening pipeline.
//!
//! This module contains the fundamental components of the pipeline:
//! - Configuration for resolution and preprocessing
//! - Error handling
//! - ONNX inference engine integration
//! - Model metadata and resolution
//! - Traits defining the pipeline seams
//!
//! It also re-exports commonly used types for convenience.

pub mod config;
pub mod errors;
pub mod inference;
pub mod metadata;
pub mod resolver;
pub mod tensor;
pub mod traits;

pub use config::{PreprocessConfig, ResolverConfig};
pub use errors::{DrError, DrResult, ProcessingStage};
pub use inference::{load_session, OrtInfer};
pub use metadata::ModelMetadata;
pub use resolver::{resolve, resolve_cached, ResolvedClassifier};
pub use tensor::{Tensor2D, Tensor4D};
pub use traits::ProbabilityModel;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. It's typically called at the start of an application to
/// enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
