//! Tensor type aliases used across the screening pipeline.

/// 2D tensor of f32 values (batch x classes).
pub type Tensor2D = ndarray::Array2<f32>;

/// 4D tensor of f32 values (batch x height x width x channels for this
/// model family's NHWC inputs).
pub type Tensor4D = ndarray::Array4<f32>;
