//! Model resolution: ordered candidate search, one-time load, memoization.
//!
//! The resolver walks a short list of candidate artifact paths, loads the
//! first one that exists, then resolves metadata the same way. The cached
//! variant runs at most once per process; every later call returns the
//! memoized outcome without touching the filesystem.

use crate::core::config::ResolverConfig;
use crate::core::errors::{DrError, DrResult};
use crate::core::metadata::ModelMetadata;
use crate::models::classification::{EfficientNetModel, EfficientNetModelBuilder};
use std::sync::OnceLock;
use tracing::info;

/// A loaded screening model together with its descriptive metadata.
#[derive(Debug)]
pub struct ResolvedClassifier {
    /// The loaded inference-capable model.
    pub model: EfficientNetModel,
    /// Display metadata, parsed or defaulted.
    pub metadata: ModelMetadata,
}

/// Resolves the screening model from the configured candidate paths.
///
/// Candidates are tried strictly in order. When none exists, resolution
/// fails with "Model file not found" and no metadata load is attempted;
/// a candidate that exists but cannot be loaded fails with the load error.
pub fn resolve(config: &ResolverConfig) -> DrResult<ResolvedClassifier> {
    let Some(model_path) = config.model_candidates.iter().find(|p| p.exists()) else {
        return Err(DrError::ModelNotLoaded {
            reason: "Model file not found".to_string(),
        });
    };

    info!("loading screening model from {}", model_path.display());
    let model = EfficientNetModelBuilder::new().build(model_path)?;
    let metadata = ModelMetadata::resolve(&config.metadata_candidates)?;

    Ok(ResolvedClassifier { model, metadata })
}

static RESOLVED: OnceLock<Result<ResolvedClassifier, String>> = OnceLock::new();

/// Resolves at most once per process and memoizes the outcome.
///
/// The first caller's configuration wins; the stored result (including a
/// failure) lives for the process lifetime, so a missing artifact stays
/// missing until the process is restarted with the file in place.
pub fn resolve_cached(config: &ResolverConfig) -> Result<&'static ResolvedClassifier, String> {
    let outcome = RESOLVED.get_or_init(|| {
        resolve(config).map_err(|e| match e {
            DrError::ModelNotLoaded { reason } => reason,
            other => other.to_string(),
        })
    });
    outcome.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn missing_candidates(dir: &tempfile::TempDir) -> ResolverConfig {
        ResolverConfig {
            model_candidates: vec![
                dir.path().join("best_model.onnx"),
                dir.path().join("dr_model_final.onnx"),
            ],
            metadata_candidates: vec![dir.path().join("metadata.json")],
        }
    }

    #[test]
    fn resolve_fails_when_no_candidate_exists() {
        let dir = tempfile::tempdir().unwrap();
        let error = resolve(&missing_candidates(&dir)).unwrap_err();
        match error {
            DrError::ModelNotLoaded { reason } => assert_eq!(reason, "Model file not found"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_fails_for_unloadable_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best_model.onnx");
        std::fs::write(&path, b"not an onnx graph").unwrap();

        let config = ResolverConfig {
            model_candidates: vec![path],
            metadata_candidates: vec![dir.path().join("metadata.json")],
        };
        assert!(resolve(&config).is_err());
    }

    #[test]
    fn resolve_cached_memoizes_the_failure() {
        let config = ResolverConfig {
            model_candidates: vec![PathBuf::from("definitely/not/here.onnx")],
            metadata_candidates: vec![PathBuf::from("definitely/not/here.json")],
        };
        let first = resolve_cached(&config).unwrap_err();
        assert_eq!(first, "Model file not found");
        let second = resolve_cached(&config).unwrap_err();
        assert_eq!(first, second);
    }
}
