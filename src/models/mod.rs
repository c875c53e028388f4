//! Model implementations for the screening pipeline.

pub mod classification;
