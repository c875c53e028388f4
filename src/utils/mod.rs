//! Utility functions for the screening pipeline.

pub mod image;

pub use image::{
    dynamic_to_rgb, load_image, load_images_individually, DEFAULT_PARALLEL_THRESHOLD,
};
