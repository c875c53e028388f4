//! Helpers for working directly with ONNX Runtime sessions.

use crate::core::errors::DrError;
use ort::logging::LogLevel;
use ort::session::Session;
use std::path::Path;

pub fn load_session(model_path: impl AsRef<Path>) -> Result<Session, DrError> {
    let path = model_path.as_ref();
    let session = Session::builder()?
        .with_log_level(LogLevel::Error)?
        .commit_from_file(path)
        .map_err(|e| {
            DrError::model_load_error(path, "failed to create ONNX session", e)
        })?;
    Ok(session)
}
