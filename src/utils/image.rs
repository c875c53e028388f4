//! Utility functions for image loading.

use crate::core::errors::DrError;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Batches larger than this load in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// Any format supported by the image crate is accepted; the screening
/// surface documents JPEG and PNG.
pub fn load_image(path: &Path) -> Result<RgbImage, DrError> {
    let img = image::open(path).map_err(DrError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Loads every path, keeping per-item outcomes so one unreadable file does
/// not discard the rest.
///
/// Output order always matches input order. Batches above the threshold
/// (default [`DEFAULT_PARALLEL_THRESHOLD`]) load in parallel.
pub fn load_images_individually<P: AsRef<Path> + Send + Sync>(
    paths: &[P],
    parallel_threshold: Option<usize>,
) -> Vec<Result<RgbImage, DrError>> {
    let threshold = parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);

    if paths.len() > threshold {
        use rayon::prelude::*;
        paths.par_iter().map(|p| load_image(p.as_ref())).collect()
    } else {
        paths.iter().map(|p| load_image(p.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_image_fails_for_missing_file() {
        assert!(load_image(Path::new("no_such_image.png")).is_err());
    }

    #[test]
    fn individual_loading_preserves_order_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        RgbImage::new(4, 4).save(&good).unwrap();
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not a png").unwrap();

        let results = load_images_individually(&[bad.clone(), good.clone(), bad], None);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
        assert!(results[2].is_err());
    }
}
