//! Core ONNX Runtime inference engine for the screening model.

use crate::core::errors::DrError;
use crate::core::tensor::{Tensor2D, Tensor4D};
use ndarray::ArrayView2;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single mutex-guarded ONNX session with discovered tensor names.
///
/// The screening workload runs one synchronous interaction at a time, so one
/// session is enough; the mutex only serializes the occasional overlap.
pub struct OrtInfer {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    model_path: PathBuf,
    model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Creates a new OrtInfer instance with default ONNX Runtime settings.
    ///
    /// When `input_name` is not given, the first declared session input is
    /// used; the output name is always discovered from the session.
    pub fn new(model_path: impl AsRef<Path>, input_name: Option<&str>) -> Result<Self, DrError> {
        let path = model_path.as_ref();
        let session = super::session::load_session(path)?;

        let input_name = match input_name {
            Some(name) => name.to_string(),
            None => session
                .inputs
                .first()
                .map(|input| input.name.clone())
                .ok_or_else(|| {
                    DrError::invalid_input(format!(
                        "model at {:?} declares no inputs - it may be invalid or corrupted",
                        path
                    ))
                })?,
        };
        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| {
                DrError::invalid_input(format!(
                    "model at {:?} declares no outputs - it may be invalid or corrupted",
                    path
                ))
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        Ok(OrtInfer {
            session: Mutex::new(session),
            input_name,
            output_name,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Runs a forward pass and returns the (batch x classes) output tensor.
    pub fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, DrError> {
        let input_shape = x.shape().to_vec();
        let batch_size = input_shape[0];

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            DrError::inference_error(
                &self.model_name,
                format!(
                    "failed to convert input tensor with shape {:?}",
                    input_shape
                ),
                e,
            )
        })?;
        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let mut session = self.session.lock().map_err(|_| {
            DrError::invalid_input("failed to acquire session lock")
        })?;
        let outputs = session.run(inputs).map_err(|e| {
            DrError::inference_error(
                &self.model_name,
                format!(
                    "ONNX Runtime inference failed with input '{}' -> output '{}'",
                    self.input_name, self.output_name
                ),
                e,
            )
        })?;

        let (output_shape, output_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                DrError::inference_error(
                    &self.model_name,
                    format!(
                        "failed to extract output tensor '{}' as f32",
                        self.output_name
                    ),
                    e,
                )
            })?;

        if output_shape.len() != 2 {
            return Err(DrError::invalid_input(format!(
                "model '{}': expected 2D output tensor, got {}D with shape {:?}",
                self.model_name,
                output_shape.len(),
                output_shape
            )));
        }

        let num_classes = output_shape[1] as usize;
        let expected_len = batch_size * num_classes;
        if output_data.len() != expected_len {
            return Err(DrError::invalid_input(format!(
                "model '{}': output data size mismatch, expected {} values, got {}",
                self.model_name,
                expected_len,
                output_data.len()
            )));
        }

        let array_view = ArrayView2::from_shape((batch_size, num_classes), output_data)
            .map_err(DrError::Tensor)?;
        Ok(array_view.to_owned())
    }

    /// Runs a forward pass and extracts the single scalar output, element
    /// `[0][0]` of the (1 x 1) sigmoid head.
    pub fn scalar_output(&self, x: &Tensor4D) -> Result<f32, DrError> {
        let output = self.infer_2d(x)?;
        output.first().copied().ok_or_else(|| {
            DrError::invalid_input(format!(
                "model '{}' produced an empty output tensor",
                self.model_name
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fails_for_missing_model_file() {
        let result = OrtInfer::new("dummy_path.onnx", None);
        assert!(result.is_err());
    }

    #[test]
    fn new_fails_for_missing_model_with_explicit_input_name() {
        let result = OrtInfer::new("dummy_path.onnx", Some("input_1"));
        assert!(result.is_err());
    }
}
