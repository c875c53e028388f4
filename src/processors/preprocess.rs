//! Conversion of arbitrary uploaded images into the fixed model input tensor.

use crate::core::config::PreprocessConfig;
use crate::core::errors::DrResult;
use crate::core::tensor::Tensor4D;
use crate::processors::normalization::NormalizeImage;
use image::imageops::{self, FilterType};
use image::DynamicImage;

/// Preprocessing chain: RGB coercion, direct resize, normalization.
#[derive(Debug)]
pub struct Preprocessor {
    target_size: (u32, u32),
    resize_filter: FilterType,
    normalizer: NormalizeImage,
}

impl Preprocessor {
    /// Builds the chain from a preprocessing configuration.
    pub fn new(config: &PreprocessConfig) -> DrResult<Self> {
        let normalizer = NormalizeImage::new(
            config.normalize_scale,
            &config.normalize_mean,
            &config.normalize_std,
            config.channel_order,
        )?;
        Ok(Self {
            target_size: config.target_size,
            resize_filter: config.resize_filter,
            normalizer,
        })
    }

    /// Returns the target input shape (height, width).
    pub fn target_size(&self) -> (u32, u32) {
        self.target_size
    }

    /// Converts one uploaded image into the model input tensor.
    ///
    /// The image is forced to 3-channel RGB, resized directly to the target
    /// shape (no cropping or padding; aspect ratio is not preserved) and
    /// normalized into a tensor with a leading batch axis of 1.
    pub fn apply(&self, image: &DynamicImage) -> DrResult<Tensor4D> {
        let rgb = image.to_rgb8();
        let resized = imageops::resize(
            &rgb,
            self.target_size.1,
            self.target_size.0,
            self.resize_filter,
        );
        self.normalizer
            .normalize_to(&DynamicImage::ImageRgb8(resized))
    }
}
