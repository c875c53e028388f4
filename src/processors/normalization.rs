//! Image normalization into model input tensors.
//!
//! Normalization folds the scale/mean/std parameters into per-channel
//! `alpha`/`beta` coefficients (`alpha = scale / std`, `beta = -mean / std`)
//! so each pixel costs one multiply-add.

use crate::core::errors::{DrError, DrResult};
use crate::core::tensor::Tensor4D;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Memory layout of the normalized tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Channels-first (NCHW).
    CHW,
    /// Channels-last (NHWC), the layout of Keras exports.
    HWC,
}

/// Normalizes images for the screening model.
#[derive(Debug, Clone)]
pub struct NormalizeImage {
    alpha: [f32; 3],
    beta: [f32; 3],
    order: ChannelOrder,
}

impl NormalizeImage {
    /// Creates a normalizer from scale, per-channel mean/std and layout.
    ///
    /// # Errors
    ///
    /// Returns an error if scale is not positive, if mean or std do not have
    /// exactly 3 elements, or if any std value is not positive.
    pub fn new(scale: f32, mean: &[f32], std: &[f32], order: ChannelOrder) -> DrResult<Self> {
        if scale <= 0.0 {
            return Err(DrError::config_error("scale must be greater than 0"));
        }
        if mean.len() != 3 {
            return Err(DrError::config_error(
                "mean must have exactly 3 elements for RGB",
            ));
        }
        if std.len() != 3 {
            return Err(DrError::config_error(
                "std must have exactly 3 elements for RGB",
            ));
        }
        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(DrError::config_error(format!(
                    "standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }

        let mut alpha = [0.0f32; 3];
        let mut beta = [0.0f32; 3];
        for c in 0..3 {
            alpha[c] = scale / std[c];
            beta[c] = -mean[c] / std[c];
        }

        Ok(Self { alpha, beta, order })
    }

    /// Normalizer for Keras EfficientNet exports.
    ///
    /// The exported graph carries its own rescaling and normalization layers,
    /// so the input tensor holds raw 0-255 pixel values in NHWC layout. This
    /// must match the artifact's training preprocessing exactly or every
    /// prediction is silently invalid.
    pub fn for_efficientnet() -> Self {
        Self {
            alpha: [1.0; 3],
            beta: [0.0; 3],
            order: ChannelOrder::HWC,
        }
    }

    /// Returns the configured channel ordering.
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Normalizes a single image into a tensor with a leading batch axis of 1.
    pub fn normalize_to(&self, img: &DynamicImage) -> DrResult<Tensor4D> {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let (w, h) = (width as usize, height as usize);
        let mut data = vec![0.0f32; 3 * h * w];

        match self.order {
            ChannelOrder::CHW => {
                for (x, y, pixel) in rgb.enumerate_pixels() {
                    let (x, y) = (x as usize, y as usize);
                    for c in 0..3 {
                        data[c * h * w + y * w + x] =
                            pixel[c] as f32 * self.alpha[c] + self.beta[c];
                    }
                }
                Tensor4D::from_shape_vec((1, 3, h, w), data).map_err(DrError::Tensor)
            }
            ChannelOrder::HWC => {
                for (x, y, pixel) in rgb.enumerate_pixels() {
                    let (x, y) = (x as usize, y as usize);
                    for c in 0..3 {
                        data[(y * w + x) * 3 + c] =
                            pixel[c] as f32 * self.alpha[c] + self.beta[c];
                    }
                }
                Tensor4D::from_shape_vec((1, h, w, 3), data).map_err(DrError::Tensor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn two_pixel_image() -> DynamicImage {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 128]));
        img.put_pixel(1, 0, Rgb([10, 20, 30]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn efficientnet_preset_passes_pixels_through() {
        let normalizer = NormalizeImage::for_efficientnet();
        let tensor = normalizer.normalize_to(&two_pixel_image()).unwrap();
        assert_eq!(tensor.shape(), &[1, 1, 2, 3]);
        assert_eq!(tensor[[0, 0, 0, 0]], 255.0);
        assert_eq!(tensor[[0, 0, 0, 1]], 0.0);
        assert_eq!(tensor[[0, 0, 0, 2]], 128.0);
        assert_eq!(tensor[[0, 0, 1, 0]], 10.0);
    }

    #[test]
    fn chw_layout_places_channels_first() {
        let normalizer =
            NormalizeImage::new(1.0, &[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], ChannelOrder::CHW)
                .unwrap();
        let tensor = normalizer.normalize_to(&two_pixel_image()).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 1, 2]);
        assert_eq!(tensor[[0, 0, 0, 0]], 255.0);
        assert_eq!(tensor[[0, 1, 0, 0]], 0.0);
        assert_eq!(tensor[[0, 2, 0, 0]], 128.0);
    }

    #[test]
    fn mean_and_std_shift_values() {
        let normalizer = NormalizeImage::new(
            1.0 / 255.0,
            &[0.5, 0.5, 0.5],
            &[0.5, 0.5, 0.5],
            ChannelOrder::HWC,
        )
        .unwrap();
        let tensor = normalizer.normalize_to(&two_pixel_image()).unwrap();
        // 255 -> (1.0 - 0.5) / 0.5 = 1.0, 0 -> -1.0
        assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 1]] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(NormalizeImage::new(0.0, &[0.0; 3], &[1.0; 3], ChannelOrder::HWC).is_err());
        assert!(NormalizeImage::new(1.0, &[0.0; 2], &[1.0; 3], ChannelOrder::HWC).is_err());
        assert!(NormalizeImage::new(1.0, &[0.0; 3], &[1.0, 0.0, 1.0], ChannelOrder::HWC).is_err());
    }
}
