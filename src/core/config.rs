//! Configuration types for model resolution and preprocessing.

use crate::core::errors::{DrError, DrResult};
use crate::processors::ChannelOrder;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Candidate locations searched by the model resolver, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Candidate model artifact paths; the first existing one is loaded.
    #[serde(default = "default_model_candidates")]
    pub model_candidates: Vec<PathBuf>,
    /// Candidate metadata paths; the first existing one is parsed.
    #[serde(default = "default_metadata_candidates")]
    pub metadata_candidates: Vec<PathBuf>,
}

fn default_model_candidates() -> Vec<PathBuf> {
    [
        "models/best_model.onnx",
        "models/dr_model_final.onnx",
        "best_model.onnx",
        "dr_model_final.onnx",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn default_metadata_candidates() -> Vec<PathBuf> {
    ["models/metadata.json", "metadata.json"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            model_candidates: default_model_candidates(),
            metadata_candidates: default_metadata_candidates(),
        }
    }
}

impl ResolverConfig {
    /// Loads a resolver configuration from a JSON file. Absent keys fall back
    /// to the default candidate lists.
    pub fn from_json_file(path: &Path) -> DrResult<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| {
            DrError::config_error(format!("failed to parse resolver config at {:?}: {e}", path))
        })
    }
}

/// Preprocessing parameters for the screening model input.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Input shape (height, width).
    pub target_size: (u32, u32),
    /// Resizing filter to use.
    pub resize_filter: FilterType,
    /// Scaling factor applied before normalization.
    pub normalize_scale: f32,
    /// Mean values for normalization (RGB order).
    pub normalize_mean: Vec<f32>,
    /// Standard deviation values for normalization (RGB order).
    pub normalize_std: Vec<f32>,
    /// Channel ordering for the normalized tensor.
    pub channel_order: ChannelOrder,
}

impl Default for PreprocessConfig {
    /// The pinned input contract of the Keras EfficientNet export: the graph
    /// carries its own rescaling and normalization layers, so the tensor
    /// holds raw 0-255 pixel values in NHWC layout.
    fn default() -> Self {
        Self {
            target_size: (224, 224),
            resize_filter: FilterType::Lanczos3,
            normalize_scale: 1.0,
            normalize_mean: vec![0.0, 0.0, 0.0],
            normalize_std: vec![1.0, 1.0, 1.0],
            channel_order: ChannelOrder::HWC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_candidates_follow_search_order() {
        let config = ResolverConfig::default();
        assert_eq!(
            config.model_candidates.first(),
            Some(&PathBuf::from("models/best_model.onnx"))
        );
        assert_eq!(config.model_candidates.len(), 4);
        assert_eq!(
            config.metadata_candidates,
            vec![
                PathBuf::from("models/metadata.json"),
                PathBuf::from("metadata.json")
            ]
        );
    }

    #[test]
    fn config_loads_from_json_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolver.json");
        std::fs::write(&path, r#"{"model_candidates": ["custom/model.onnx"]}"#).unwrap();

        let config = ResolverConfig::from_json_file(&path).unwrap();
        assert_eq!(
            config.model_candidates,
            vec![PathBuf::from("custom/model.onnx")]
        );
        assert_eq!(config.metadata_candidates.len(), 2);
    }
}
