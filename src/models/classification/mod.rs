//! Classification models.

pub mod efficientnet;

pub use efficientnet::{EfficientNetModel, EfficientNetModelBuilder};
