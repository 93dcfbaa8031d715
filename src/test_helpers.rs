//! Shared test utilities.
//!
//! Fixture builders for scanner directories and synthetic JPEGs, plus a
//! shorthand for hand-built [`ScanRecord`]s.

use crate::types::{ImageSide, ScanRecord};
use image::{ImageEncoder, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create empty files named `names` inside `dir`.
pub fn touch_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}

/// Write a small valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Records
// =========================================================================

/// A record as the scan stage would produce it for `/scans/<file_name>`.
pub fn record(file_name: &str, image_id: u64, side: ImageSide) -> ScanRecord {
    ScanRecord {
        path: PathBuf::from("/scans").join(file_name),
        file_name: file_name.to_string(),
        side,
        image_id,
    }
}
