//! Structures and helpers for ONNX Runtime inference.
//!
//! This module holds the low level inference engine the screening model
//! delegates to, together with session loading helpers.

pub mod ort_infer;
pub mod session;

pub use ort_infer::OrtInfer;
pub use session::load_session;
