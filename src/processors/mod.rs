//! Image processing for the screening pipeline.

pub mod normalization;
pub mod preprocess;

pub use normalization::{ChannelOrder, NormalizeImage};
pub use preprocess::Preprocessor;
