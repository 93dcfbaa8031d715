//! Source directory listing and filename decoding.
//!
//! Stage 1 of the organize pipeline. Lists the scanner's output directory
//! (non-recursively), keeps every `*.jpg` file, and decodes each name with
//! [`decode_scan_name`]. Files whose names don't decode are logged and kept
//! aside in [`ScanResult::rejected`]; they never stop the run.
//!
//! Only lowercase `.jpg` is picked up, which is what the scanner writes.

use crate::naming::{NameError, decode_scan_name};
use crate::types::ScanRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read source directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

const SOURCE_EXTENSION: &str = ".jpg";

/// Outcome of scanning a source directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Decoded records, in lexicographic path order.
    pub records: Vec<ScanRecord>,
    /// Files that matched the extension but whose names didn't decode.
    pub rejected: Vec<(PathBuf, NameError)>,
}

/// List `.jpg` files directly inside `dir`, sorted by path.
pub fn list_source_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut images: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().ends_with(SOURCE_EXTENSION))
                .unwrap_or(false)
        })
        .collect();

    images.sort();
    Ok(images)
}

/// Decode an already-listed set of paths, preserving their order.
pub fn decode_all(paths: &[PathBuf]) -> ScanResult {
    let mut result = ScanResult::default();
    for path in paths {
        match decode_scan_name(path) {
            Ok(record) => {
                tracing::debug!(
                    "{} → image {} ({})",
                    record.file_name,
                    record.image_id,
                    record.side
                );
                result.records.push(record);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                result.rejected.push((path.clone(), e));
            }
        }
    }
    result
}

/// List and decode every scanner file in `dir`.
pub fn scan(dir: &Path) -> Result<ScanResult, ScanError> {
    let paths = list_source_images(dir)?;
    tracing::info!("Found {} images in {}", paths.len(), dir.display());
    Ok(decode_all(&paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::touch_files;
    use crate::types::ImageSide;
    use tempfile::TempDir;

    #[test]
    fn lists_only_jpg_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch_files(
            tmp.path(),
            &["b_0002.jpg", "a_0001.jpg", "notes.txt", "c_0003.JPG", "d.png"],
        );

        let listed = list_source_images(tmp.path()).unwrap();
        let names: Vec<_> = listed
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_0001.jpg", "b_0002.jpg"]);
    }

    #[test]
    fn listing_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested.jpg")).unwrap();
        touch_files(&tmp.path().join("nested.jpg"), &["x_0001.jpg"]);
        touch_files(tmp.path(), &["x_0002.jpg"]);

        let listed = list_source_images(tmp.path()).unwrap();
        assert_eq!(listed, vec![tmp.path().join("x_0002.jpg")]);
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_source_images(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn scan_separates_rejected_names() {
        let tmp = TempDir::new().unwrap();
        touch_files(
            tmp.path(),
            &[
                "Album_0001.jpg",
                "Album_0001_a.jpg",
                "Album_0001_b.jpg",
                "Album_0002_z.jpg",
                "cover.final.jpg",
            ],
        );

        let result = scan(tmp.path()).unwrap();
        let sides: Vec<_> = result.records.iter().map(|r| r.side).collect();
        assert_eq!(
            sides,
            vec![
                ImageSide::OriginalFront,
                ImageSide::CorrectedFront,
                ImageSide::OriginalBack,
            ]
        );
        assert_eq!(result.rejected.len(), 2);
        assert!(
            result
                .rejected
                .iter()
                .any(|(_, e)| matches!(e, NameError::UnknownSideMarker(_)))
        );
        assert!(
            result
                .rejected
                .iter()
                .any(|(_, e)| matches!(e, NameError::UnexpectedComponents { count: 3 }))
        );
    }
}
