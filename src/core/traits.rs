//! Traits defining the seams of the screening pipeline.

use crate::core::errors::DrResult;
use image::DynamicImage;

/// A model that maps an uploaded image to a single probability.
///
/// The scalar is interpreted as the probability of the negative class,
/// No_DR (class index 1). This convention is pinned to the trained artifact:
/// a replacement model trained with the opposite convention would silently
/// invert every label, so it must not be changed without evidence from the
/// artifact itself.
pub trait ProbabilityModel {
    /// Runs the full forward path (preprocessing included) for one image.
    fn probability(&self, image: &DynamicImage) -> DrResult<f32>;
}

impl<M: ProbabilityModel + ?Sized> ProbabilityModel for &M {
    fn probability(&self, image: &DynamicImage) -> DrResult<f32> {
        (**self).probability(image)
    }
}
