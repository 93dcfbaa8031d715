//! Pure Rust JPEG backend built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only) |
//! | Decode | `image::ImageReader` with the `jpeg` decoder |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::codecs::jpeg::JpegEncoder` at the configured quality |
//!
//! JPEG encoding is deterministic, so the same source and parameters always
//! produce byte-identical output.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageReader};
use std::path::Path;

/// Production codec: decode, Lanczos3 downscale, JPEG encode.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// JPEG has no alpha channel and only 8-bit gray/RGB; convert anything else.
fn into_jpeg_compatible(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

fn save_jpeg(img: DynamicImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    into_jpeg_compatible(img)
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_jpeg(resized, &params.output, params.quality.value())
    }
}
