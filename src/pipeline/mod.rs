//! Screening pipeline facade.
//!
//! [`DrScreener`] ties together the resolved model, its metadata, and the
//! decision rule. Single-image screening runs preprocess -> forward pass ->
//! threshold; batch screening is a strictly ordered sequential loop where a
//! failed image yields one "Failed" record and never aborts the rest.

use crate::core::config::ResolverConfig;
use crate::core::errors::{DrError, DrResult};
use crate::core::metadata::ModelMetadata;
use crate::core::resolver::{self, ResolvedClassifier};
use crate::core::traits::ProbabilityModel;
use crate::domain::batch::{BatchRecord, BatchSummary};
use crate::domain::decision::{decide, Prediction};
use crate::models::classification::EfficientNetModel;
use crate::utils::load_images_individually;
use image::DynamicImage;
use std::path::Path;
use tracing::warn;

/// Basic facts about an uploaded image, shown alongside the prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDetails {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Source color type, e.g. "Rgb8".
    pub color_type: String,
}

/// Returns display details for an uploaded image.
pub fn describe_image(image: &DynamicImage) -> ImageDetails {
    ImageDetails {
        width: image.width(),
        height: image.height(),
        color_type: format!("{:?}", image.color()),
    }
}

/// Screening pipeline facade: one loaded model and its metadata.
#[derive(Debug)]
pub struct DrScreener<M = EfficientNetModel> {
    model: M,
    metadata: ModelMetadata,
}

impl DrScreener<EfficientNetModel> {
    /// Resolves the model from the default candidate locations.
    pub fn from_default_locations() -> DrResult<Self> {
        Self::from_config(&ResolverConfig::default())
    }

    /// Resolves the model from an explicit configuration (uncached).
    pub fn from_config(config: &ResolverConfig) -> DrResult<Self> {
        let ResolvedClassifier { model, metadata } = resolver::resolve(config)?;
        Ok(Self { model, metadata })
    }
}

impl DrScreener<&'static EfficientNetModel> {
    /// Returns a screener over the process-wide model, resolving it on first
    /// access.
    ///
    /// Resolution runs at most once per process. When it failed, every later
    /// call keeps returning `ModelNotLoaded` with the original reason until
    /// the artifact is put in place and the process restarted; no inference
    /// is ever attempted without a model handle.
    pub fn global() -> DrResult<Self> {
        let resolved = resolver::resolve_cached(&ResolverConfig::default())
            .map_err(|reason| DrError::ModelNotLoaded { reason })?;
        Ok(Self {
            model: &resolved.model,
            metadata: resolved.metadata.clone(),
        })
    }
}

impl<M: ProbabilityModel> DrScreener<M> {
    /// Builds a screener from an already constructed model and metadata.
    pub fn with_model(model: M, metadata: ModelMetadata) -> Self {
        Self { model, metadata }
    }

    /// Returns the display metadata for the loaded model.
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Screens one image: preprocess, forward pass, threshold decision.
    ///
    /// Preprocessing errors propagate unchanged; inference failures surface
    /// as errors on this call, never as panics.
    pub fn predict(&self, image: &DynamicImage) -> DrResult<Prediction> {
        let probability = self.model.probability(image)?;
        Ok(decide(probability))
    }

    /// Loads an image from disk and screens it.
    pub fn predict_path(&self, path: &Path) -> DrResult<Prediction> {
        let image = crate::utils::load_image(path)?;
        self.predict(&DynamicImage::ImageRgb8(image))
    }

    /// Screens a batch of named images in input order.
    pub fn process_batch(
        &self,
        items: &[(String, DynamicImage)],
    ) -> (Vec<BatchRecord>, BatchSummary) {
        self.process_batch_with_progress(items, |_, _, _| {})
    }

    /// Screens a batch of named images, reporting progress per item.
    ///
    /// The callback receives `(processed, total, filename)` before each item
    /// runs. One failed image yields one "Failed" record; the loop always
    /// finishes the batch.
    pub fn process_batch_with_progress<F>(
        &self,
        items: &[(String, DynamicImage)],
        mut on_progress: F,
    ) -> (Vec<BatchRecord>, BatchSummary)
    where
        F: FnMut(usize, usize, &str),
    {
        let mut records = Vec::with_capacity(items.len());
        for (index, (filename, image)) in items.iter().enumerate() {
            on_progress(index + 1, items.len(), filename);
            let record = match self.predict(image) {
                Ok(prediction) => BatchRecord::success(filename, &prediction),
                Err(error) => {
                    warn!("screening failed for {filename}: {error}");
                    BatchRecord::failure(filename)
                }
            };
            records.push(record);
        }
        let summary = BatchSummary::from_records(&records);
        (records, summary)
    }

    /// Screens a batch of image paths in input order.
    ///
    /// A file that cannot be read or decoded yields a "Failed" record for
    /// that path only.
    pub fn process_batch_paths<P>(&self, paths: &[P]) -> (Vec<BatchRecord>, BatchSummary)
    where
        P: AsRef<Path> + Send + Sync,
    {
        self.process_batch_paths_with_progress(paths, |_, _, _| {})
    }

    /// Screens a batch of image paths, reporting progress per item.
    pub fn process_batch_paths_with_progress<P, F>(
        &self,
        paths: &[P],
        mut on_progress: F,
    ) -> (Vec<BatchRecord>, BatchSummary)
    where
        P: AsRef<Path> + Send + Sync,
        F: FnMut(usize, usize, &str),
    {
        let loaded = load_images_individually(paths, None);

        let mut records = Vec::with_capacity(paths.len());
        for (index, (path, loaded)) in paths.iter().zip(loaded).enumerate() {
            let path = path.as_ref();
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| path.display().to_string());
            on_progress(index + 1, paths.len(), &filename);

            let outcome =
                loaded.and_then(|img| self.predict(&DynamicImage::ImageRgb8(img)));
            let record = match outcome {
                Ok(prediction) => BatchRecord::success(&filename, &prediction),
                Err(error) => {
                    warn!("screening failed for {filename}: {error}");
                    BatchRecord::failure(&filename)
                }
            };
            records.push(record);
        }
        let summary = BatchSummary::from_records(&records);
        (records, summary)
    }
}
