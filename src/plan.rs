//! Destination naming for reconciled photos.
//!
//! Every photo is written as its image id, zero-padded to the digit count of
//! the largest id in the run, so the output sorts correctly in any file
//! browser:
//!
//! ```text
//! copy backs          skip backs
//! 001.jpg             001_front.jpg
//! 001_back.jpg        023_front.jpg
//! 023.jpg             456_front.jpg
//! 456.jpg
//! 456_back.jpg
//! ```
//!
//! The `_front` suffix appears only when backs are skipped.

use crate::types::{CopyTarget, PlannedCopy, ReconciledPair};
use std::path::Path;

/// Digit count of the largest image id, or `None` for an empty run.
pub fn id_width(pairs: &[ReconciledPair]) -> Option<usize> {
    pairs
        .iter()
        .map(|p| p.image_id)
        .max()
        .map(|max| max.to_string().len())
}

pub fn front_file_name(image_id: u64, width: usize, copy_back: bool) -> String {
    let suffix = if copy_back { "" } else { "_front" };
    format!("{:0width$}{}.jpg", image_id, suffix, width = width)
}

pub fn back_file_name(image_id: u64, width: usize) -> String {
    format!("{:0width$}_back.jpg", image_id, width = width)
}

/// Compute destination paths for every pair, in input order.
///
/// Backs are planned only when `copy_back` is set and the pair has one.
pub fn plan(pairs: &[ReconciledPair], destination: &Path, copy_back: bool) -> Vec<PlannedCopy> {
    let Some(width) = id_width(pairs) else {
        return Vec::new();
    };

    pairs
        .iter()
        .map(|pair| PlannedCopy {
            image_id: pair.image_id,
            front: CopyTarget {
                source: pair.front.clone(),
                destination: destination.join(front_file_name(pair.image_id, width, copy_back)),
            },
            back: pair
                .back
                .as_ref()
                .filter(|_| copy_back)
                .map(|back| CopyTarget {
                    source: back.clone(),
                    destination: destination.join(back_file_name(pair.image_id, width)),
                }),
        })
        .collect()
}
