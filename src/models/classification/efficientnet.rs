//! EfficientNet Binary Screening Model
//!
//! This module wraps an EfficientNet ONNX export whose single sigmoid output
//! is the probability of the negative class (No_DR, class index 1). The
//! output convention is pinned to the trained artifact and must not be
//! changed without evidence from the artifact itself.

use crate::core::config::PreprocessConfig;
use crate::core::errors::DrResult;
use crate::core::inference::OrtInfer;
use crate::core::tensor::{Tensor2D, Tensor4D};
use crate::core::traits::ProbabilityModel;
use crate::processors::Preprocessor;
use image::DynamicImage;
use std::path::Path;

/// Binary screening classifier backed by an EfficientNet ONNX export.
#[derive(Debug)]
pub struct EfficientNetModel {
    /// ONNX Runtime inference engine
    inference: OrtInfer,
    /// Preprocessing chain producing the model input tensor
    preprocessor: Preprocessor,
}

impl EfficientNetModel {
    /// Creates a new screening model.
    pub fn new(inference: OrtInfer, preprocessor: Preprocessor) -> Self {
        Self {
            inference,
            preprocessor,
        }
    }

    /// Returns the model name, derived from the artifact file stem.
    pub fn model_name(&self) -> &str {
        self.inference.model_name()
    }

    /// Preprocesses one image into the model input tensor.
    pub fn preprocess(&self, image: &DynamicImage) -> DrResult<Tensor4D> {
        self.preprocessor.apply(image)
    }

    /// Runs inference on the preprocessed tensor.
    ///
    /// # Returns
    ///
    /// Model predictions as a 2D tensor (batch_size x num_outputs).
    pub fn infer(&self, batch_tensor: &Tensor4D) -> DrResult<Tensor2D> {
        self.inference.infer_2d(batch_tensor)
    }
}

impl ProbabilityModel for EfficientNetModel {
    /// Full forward path: preprocess -> single forward pass -> scalar P(No_DR).
    fn probability(&self, image: &DynamicImage) -> DrResult<f32> {
        let batch_tensor = self.preprocess(image)?;
        self.inference.scalar_output(&batch_tensor)
    }
}

/// Builder for the screening model.
#[derive(Debug, Default)]
pub struct EfficientNetModelBuilder {
    /// Preprocessing configuration
    preprocess_config: PreprocessConfig,
    /// Optional explicit input tensor name; discovered from the session
    /// when absent
    input_name: Option<String>,
}

impl EfficientNetModelBuilder {
    /// Creates a new builder with the default preprocessing configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preprocessing configuration.
    pub fn preprocess_config(mut self, config: PreprocessConfig) -> Self {
        self.preprocess_config = config;
        self
    }

    /// Sets the input image shape (height, width).
    pub fn target_size(mut self, size: (u32, u32)) -> Self {
        self.preprocess_config.target_size = size;
        self
    }

    /// Sets an explicit input tensor name.
    pub fn input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = Some(name.into());
        self
    }

    /// Builds the screening model from an ONNX artifact path.
    pub fn build(self, model_path: &Path) -> DrResult<EfficientNetModel> {
        let inference = OrtInfer::new(model_path, self.input_name.as_deref())?;
        let preprocessor = Preprocessor::new(&self.preprocess_config)?;
        Ok(EfficientNetModel::new(inference, preprocessor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fails_for_missing_artifact() {
        let result = EfficientNetModelBuilder::new().build(Path::new("dummy_path.onnx"));
        assert!(result.is_err());
    }

    #[test]
    fn builder_applies_target_size_override() {
        let builder = EfficientNetModelBuilder::new().target_size((300, 300));
        assert_eq!(builder.preprocess_config.target_size, (300, 300));
    }
}
