//! High-level image operations.
//!
//! Combines the dimension math with backend execution: callers hand over a
//! source, a destination and a scale, and get back what was written.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::scaled_dimensions;
use super::params::{Quality, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// What a resize-and-copy produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOutcome {
    pub original: Dimensions,
    pub resized: Dimensions,
    pub original_bytes: u64,
    pub resized_bytes: u64,
}

/// Plan a resize without executing it.
pub fn plan_resize(
    source: &Path,
    destination: &Path,
    original: Dimensions,
    factor: f64,
    quality: Quality,
) -> ResizeParams {
    let (width, height) = scaled_dimensions((original.width, original.height), factor);
    ResizeParams {
        source: source.to_path_buf(),
        output: destination.to_path_buf(),
        width,
        height,
        quality,
    }
}

/// Downscale `source` by `factor` and write it to `destination`.
///
/// Fails with [`BackendError::SourceNotFound`] before touching the codec when
/// the source is missing. An existing destination file is overwritten.
pub fn resize_and_copy(
    backend: &impl ImageBackend,
    source: &Path,
    destination: &Path,
    factor: f64,
    quality: Quality,
) -> Result<CopyOutcome> {
    if !source.exists() {
        return Err(BackendError::SourceNotFound(source.to_path_buf()));
    }
    let original_bytes = std::fs::metadata(source)?.len();

    let original = backend.identify(source)?;
    let params = plan_resize(source, destination, original, factor, quality);
    tracing::debug!(
        "Resizing {} from {}x{} to {}x{}",
        source.display(),
        original.width,
        original.height,
        params.width,
        params.height
    );
    backend.resize(&params)?;

    let resized_bytes = std::fs::metadata(destination)?.len();
    Ok(CopyOutcome {
        original,
        resized: Dimensions::new(params.width, params.height),
        original_bytes,
        resized_bytes,
    })
}
