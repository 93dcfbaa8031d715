//! Image codec trait and shared types.
//!
//! The organize pipeline only ever needs two things from a codec: the pixel
//! dimensions of a source image, and a resize that writes the result to disk.
//! [`ImageBackend`] captures exactly that so the copy stage can be tested with
//! a mock that records calls instead of touching pixels.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::ResizeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Trait for image codecs.
pub trait ImageBackend {
    /// Read image dimensions without a full decode where possible.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode `params.source`, resize to exactly `params.width × params.height`,
    /// and write `params.output`, replacing any existing file.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
