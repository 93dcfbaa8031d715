//! Filename decoding for scanner output.
//!
//! The scanner names every file `<album>_<id>[_<side>].jpg`, where the album
//! part may itself contain underscores (or be absent entirely):
//!
//! - `Summer_0042.jpg` → id 42, original front
//! - `Summer_0042_a.jpg` → id 42, corrected (enhanced) front
//! - `Summer_0042_b.jpg` → id 42, back
//! - `0042.jpg` → id 42, original front
//!
//! ## Locating the id
//!
//! The id segment is found by walking the `_`-separated segments from the
//! right and stopping at the first one that is an unsigned integer. When no
//! segment is numeric the walk ends at index 0, whose parse then fails. This
//! means a numeric segment after the side marker wins over the real id:
//! `Summer_0042_b_2.jpg` decodes as id 2, original front.

use crate::types::{ImageSide, ScanRecord};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("expected `<name>.<ext>`, found {count} dot-separated components")]
    UnexpectedComponents { count: usize },
    #[error("no image id segment at index {index} ({segments} segments)")]
    MissingImageId { index: usize, segments: usize },
    #[error("segment {0:?} is not a valid image id")]
    InvalidImageId(String),
    #[error("unknown side marker {0:?}")]
    UnknownSideMarker(String),
    #[error("path has no file name")]
    NoFileName,
}

/// Decode one scanner file path into a [`ScanRecord`].
pub fn decode_scan_name(path: &Path) -> Result<ScanRecord, NameError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or(NameError::NoFileName)?;

    let info_index = image_info_index(&file_name)?;

    // Segments of the whole file name: the last one still carries `.ext`.
    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() < info_index {
        return Err(NameError::MissingImageId {
            index: info_index,
            segments: parts.len(),
        });
    }

    let image_id = parse_image_id(parts[info_index])?;

    let side = if parts.len() - info_index < 2 {
        ImageSide::OriginalFront
    } else {
        side_from_marker(parts[info_index + 1])?
    };

    Ok(ScanRecord {
        path: path.to_path_buf(),
        file_name,
        side,
        image_id,
    })
}

/// Index of the `_`-separated segment holding the image id.
///
/// Walks right to left, breaking at the first integer segment; ends at 0
/// when none parses.
fn image_info_index(file_name: &str) -> Result<usize, NameError> {
    let components: Vec<&str> = file_name.split('.').collect();
    if components.len() != 2 {
        return Err(NameError::UnexpectedComponents {
            count: components.len(),
        });
    }

    let segments: Vec<&str> = components[0].split('_').collect();
    let mut info_index = segments.len() - 1;
    for i in (0..segments.len()).rev() {
        info_index = i;
        if is_integer(segments[i]) {
            break;
        }
    }
    Ok(info_index)
}

fn is_integer(segment: &str) -> bool {
    segment.parse::<u64>().is_ok()
}

/// Parse an id segment, dropping any `.ext` still attached to it.
fn parse_image_id(segment: &str) -> Result<u64, NameError> {
    let raw = segment.split('.').next().unwrap_or(segment);
    raw.parse::<u64>()
        .map_err(|_| NameError::InvalidImageId(raw.to_string()))
}

fn side_from_marker(segment: &str) -> Result<ImageSide, NameError> {
    match segment.chars().next() {
        Some('a') => Ok(ImageSide::CorrectedFront),
        Some('b') => Ok(ImageSide::OriginalBack),
        _ => Err(NameError::UnknownSideMarker(segment.to_string())),
    }
}
