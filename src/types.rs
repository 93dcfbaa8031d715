//! Shared types passed between pipeline stages.
//!
//! Each stage consumes the previous stage's output exactly once:
//! [`ScanRecord`] (scan) → [`ReconciledPair`] (reconcile) → [`PlannedCopy`] (plan).
//! Nothing here outlives a single run.

use std::fmt;
use std::path::PathBuf;

/// Which face of a physical photo a scan file holds.
///
/// The variant decides merge priority during reconciliation: a corrected
/// front always wins over an original front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSide {
    /// Scanner-enhanced front (`_a` suffix).
    CorrectedFront,
    /// Raw front scan (no suffix).
    OriginalFront,
    /// Back of the photo (`_b` suffix).
    OriginalBack,
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageSide::CorrectedFront => "corrected front",
            ImageSide::OriginalFront => "original front",
            ImageSide::OriginalBack => "back",
        };
        f.write_str(label)
    }
}

/// A source file whose name decoded successfully.
///
/// Files that fail to decode never become a `ScanRecord`; see
/// [`NameError`](crate::naming::NameError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// Full path to the source image.
    pub path: PathBuf,
    /// Final path component, e.g. `Summer_0042_a.jpg`.
    pub file_name: String,
    pub side: ImageSide,
    /// Number shared by the front and back scans of one photo.
    pub image_id: u64,
}

/// One physical photo after merging all of its scan files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledPair {
    pub image_id: u64,
    pub front: PathBuf,
    pub back: Option<PathBuf>,
}

/// Source and destination of a single image copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Everything the copy stage needs for one photo.
///
/// `back` is `None` when the photo has no back scan or back copying is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub image_id: u64,
    pub front: CopyTarget,
    pub back: Option<CopyTarget>,
}
