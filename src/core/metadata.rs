//! Descriptive metadata about the trained screening model.
//!
//! Metadata is display-only: accuracy and AUC feed the report and the model
//! statistics panel, never the inference path. A missing metadata file is not
//! an error; the documented defaults apply.

use crate::core::errors::{DrError, DrResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Static record describing the trained model, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Class labels in model output order: index 0 = DR, index 1 = No_DR.
    pub classes: [String; 2],
    /// Held-out test accuracy in [0, 1].
    pub test_accuracy: f64,
    /// Held-out test AUC in [0, 1].
    pub test_auc: f64,
    /// Architecture name shown in reports.
    pub architecture: String,
}

impl Default for ModelMetadata {
    fn default() -> Self {
        Self {
            classes: ["DR".to_string(), "No_DR".to_string()],
            test_accuracy: 0.96,
            test_auc: 0.99,
            architecture: "EfficientNetB3".to_string(),
        }
    }
}

impl ModelMetadata {
    /// Parses metadata from a JSON file.
    pub fn from_json_file(path: &Path) -> DrResult<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| {
            DrError::config_error(format!("failed to parse metadata at {:?}: {e}", path))
        })
    }

    /// Returns the first existing candidate parsed, or the defaults when no
    /// candidate exists. A present-but-malformed file is an error.
    pub fn resolve<P: AsRef<Path>>(candidates: &[P]) -> DrResult<Self> {
        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                return Self::from_json_file(path);
            }
        }
        warn!("no metadata file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Test accuracy formatted for display, e.g. "96.0%".
    pub fn accuracy_percent(&self) -> String {
        format!("{:.1}%", self.test_accuracy * 100.0)
    }

    /// Test AUC formatted for display, e.g. "0.990".
    pub fn auc_display(&self) -> String {
        format!("{:.3}", self.test_auc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_record() {
        let metadata = ModelMetadata::default();
        assert_eq!(metadata.classes, ["DR".to_string(), "No_DR".to_string()]);
        assert_eq!(metadata.test_accuracy, 0.96);
        assert_eq!(metadata.test_auc, 0.99);
        assert_eq!(metadata.architecture, "EfficientNetB3");
    }

    #[test]
    fn resolve_defaults_when_no_candidate_exists() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = [dir.path().join("metadata.json")];
        let metadata = ModelMetadata::resolve(&candidates).unwrap();
        assert_eq!(metadata, ModelMetadata::default());
    }

    #[test]
    fn resolve_parses_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"classes": ["DR", "No_DR"], "test_accuracy": 0.91, "test_auc": 0.97, "architecture": "EfficientNetB0"}}"#
        )
        .unwrap();

        let missing = dir.path().join("missing.json");
        let metadata = ModelMetadata::resolve(&[missing, path]).unwrap();
        assert_eq!(metadata.test_accuracy, 0.91);
        assert_eq!(metadata.architecture, "EfficientNetB0");
    }

    #[test]
    fn malformed_metadata_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ModelMetadata::resolve(&[path]).is_err());
    }

    #[test]
    fn display_helpers_format_as_reported() {
        let metadata = ModelMetadata::default();
        assert_eq!(metadata.accuracy_percent(), "96.0%");
        assert_eq!(metadata.auc_display(), "0.990");
    }
}
