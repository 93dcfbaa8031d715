//! Merging per-file scan records into one front/back pair per photo.
//!
//! The scanner can emit up to three files for one photo: the raw front, an
//! enhanced front, and the back. Records are grouped by image id and each
//! group is folded in input order:
//!
//! | Side | Effect |
//! |---|---|
//! | `OriginalBack` | sets back, later ones overwrite |
//! | `CorrectedFront` | sets front, later ones overwrite (including an original front) |
//! | `OriginalFront` | sets front only if no front is set yet |
//!
//! A group that ends up without a front is dropped.

use crate::types::{ImageSide, ReconciledPair, ScanRecord};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Group records by image id, keeping input order within each group.
pub fn group_by_image_id(records: &[ScanRecord]) -> BTreeMap<u64, Vec<&ScanRecord>> {
    let mut groups: BTreeMap<u64, Vec<&ScanRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.image_id).or_default().push(record);
    }
    groups
}

/// Fold one group into a pair. Returns `None` when the group has no front.
pub fn reconcile(image_id: u64, group: &[&ScanRecord]) -> Option<ReconciledPair> {
    let mut front: Option<PathBuf> = None;
    let mut back: Option<PathBuf> = None;

    for record in group {
        match record.side {
            ImageSide::OriginalBack => back = Some(record.path.clone()),
            ImageSide::CorrectedFront => front = Some(record.path.clone()),
            ImageSide::OriginalFront => {
                if front.is_none() {
                    front = Some(record.path.clone());
                }
            }
        }
    }

    let Some(front) = front else {
        tracing::warn!(
            "Image {} has no front scan ({} files), skipping",
            image_id,
            group.len()
        );
        return None;
    };

    Some(ReconciledPair {
        image_id,
        front,
        back,
    })
}

/// Group and reconcile all records. Pairs come out ordered by image id.
pub fn reconcile_all(records: &[ScanRecord]) -> Vec<ReconciledPair> {
    group_by_image_id(records)
        .into_iter()
        .filter_map(|(id, group)| reconcile(id, &group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;

    #[test]
    fn corrected_front_wins_and_back_is_kept() {
        let records = vec![
            record("Box_0007.jpg", 7, ImageSide::OriginalFront),
            record("Box_0007_a.jpg", 7, ImageSide::CorrectedFront),
            record("Box_0007_b.jpg", 7, ImageSide::OriginalBack),
        ];

        let pairs = reconcile_all(&records);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].image_id, 7);
        assert_eq!(pairs[0].front, records[1].path);
        assert_eq!(pairs[0].back.as_ref(), Some(&records[2].path));
    }

    #[test]
    fn corrected_front_overwrites_even_when_it_comes_first() {
        let records = vec![
            record("x_0001_a.jpg", 1, ImageSide::CorrectedFront),
            record("y_0001.jpg", 1, ImageSide::OriginalFront),
        ];
        let pairs = reconcile_all(&records);
        assert_eq!(pairs[0].front, records[0].path);
    }

    #[test]
    fn first_original_front_is_kept() {
        let records = vec![
            record("a_0003.jpg", 3, ImageSide::OriginalFront),
            record("b_0003.jpg", 3, ImageSide::OriginalFront),
        ];
        let pairs = reconcile_all(&records);
        assert_eq!(pairs[0].front, records[0].path);
        assert_eq!(pairs[0].back, None);
    }

    #[test]
    fn last_corrected_front_and_last_back_win() {
        let records = vec![
            record("a_0004_a.jpg", 4, ImageSide::CorrectedFront),
            record("a_0004_b.jpg", 4, ImageSide::OriginalBack),
            record("b_0004_a.jpg", 4, ImageSide::CorrectedFront),
            record("b_0004_b.jpg", 4, ImageSide::OriginalBack),
        ];
        let pairs = reconcile_all(&records);
        assert_eq!(pairs[0].front, records[2].path);
        assert_eq!(pairs[0].back.as_ref(), Some(&records[3].path));
    }

    #[test]
    fn back_only_group_is_dropped() {
        let records = vec![record("Box_0009_b.jpg", 9, ImageSide::OriginalBack)];
        assert!(reconcile_all(&records).is_empty());
    }

    #[test]
    fn groups_keep_input_order_and_sort_by_id() {
        let records = vec![
            record("a_0010.jpg", 10, ImageSide::OriginalFront),
            record("a_0002.jpg", 2, ImageSide::OriginalFront),
            record("a_0010_b.jpg", 10, ImageSide::OriginalBack),
        ];

        let groups = group_by_image_id(&records);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![2, 10]);
        assert_eq!(groups[&10][0].file_name, "a_0010.jpg");
        assert_eq!(groups[&10][1].file_name, "a_0010_b.jpg");

        let ids: Vec<u64> = reconcile_all(&records).iter().map(|p| p.image_id).collect();
        assert_eq!(ids, vec![2, 10]);
    }

    #[test]
    fn dropped_groups_do_not_affect_neighbours() {
        let records = vec![
            record("a_0001.jpg", 1, ImageSide::OriginalFront),
            record("a_0002_b.jpg", 2, ImageSide::OriginalBack),
            record("a_0003_a.jpg", 3, ImageSide::CorrectedFront),
        ];
        let ids: Vec<u64> = reconcile_all(&records).iter().map(|p| p.image_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
