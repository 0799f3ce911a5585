//! Loop geometry for the padded slide track
//!
//! The track masks the loop seam by duplicating `clone_count` items at each
//! end of the source list. These functions are pure; the controller decides
//! when to apply them.

/// Build the padded sequence: the last `clone_count` items prepended and the
/// first `clone_count` appended.
///
/// Requires `items.len() >= clone_count`; callers clamp the clone count to the
/// list length (see [`super::Controller::new`]).
pub fn padded_sequence<T: Clone>(items: &[T], clone_count: usize) -> Vec<T> {
    debug_assert!(
        items.len() >= clone_count,
        "clone count must not exceed item count"
    );

    let mut padded = Vec::with_capacity(items.len() + 2 * clone_count);
    padded.extend_from_slice(&items[items.len() - clone_count..]);
    padded.extend_from_slice(items);
    padded.extend_from_slice(&items[..clone_count]);
    padded
}

/// Pixel offset of the track for a given padded index.
pub fn index_to_offset(index: usize, slide_width: f32) -> f32 {
    -(index as f32) * slide_width
}

/// Map a padded index that landed on a clone back to its real equivalent.
///
/// Returns `None` when `index` already points at a real item. Applying the
/// correction to its own output always returns `None`.
pub fn correct_boundary(index: usize, source_len: usize, clone_count: usize) -> Option<usize> {
    if index >= clone_count + source_len {
        Some(index - source_len)
    } else if index < clone_count {
        Some(index + source_len)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_sequence_shape() {
        let items: Vec<u32> = (0..6).collect();
        let padded = padded_sequence(&items, 3);

        assert_eq!(padded.len(), 6 + 2 * 3, "length must be N + 2K");
        assert_eq!(&padded[3..9], &items[..], "real items keep source order");
        assert_eq!(&padded[..3], &[3, 4, 5], "head clones are the last K items");
        assert_eq!(&padded[9..], &[0, 1, 2], "tail clones are the first K items");
    }

    #[test]
    fn padded_sequence_holds_for_any_valid_length() {
        for n in 3..20usize {
            let items: Vec<usize> = (0..n).collect();
            let padded = padded_sequence(&items, 3);
            assert_eq!(padded.len(), n + 6);
            assert_eq!(&padded[3..3 + n], &items[..]);
        }
    }

    #[test]
    fn padded_sequence_with_zero_clones_is_identity() {
        let items = vec![1, 2, 3];
        assert_eq!(padded_sequence(&items, 0), items);
    }

    #[test]
    fn offset_is_negative_index_times_width() {
        assert_eq!(index_to_offset(0, 300.0), 0.0);
        assert_eq!(index_to_offset(4, 300.0), -1200.0);
        assert_eq!(index_to_offset(3, 250.5), -751.5);
    }

    #[test]
    fn boundary_correction_maps_clones_to_real_indices() {
        // N = 6, K = 3: real indices are [3, 9)
        assert_eq!(correct_boundary(9, 6, 3), Some(3));
        assert_eq!(correct_boundary(10, 6, 3), Some(4));
        assert_eq!(correct_boundary(2, 6, 3), Some(8));
        assert_eq!(correct_boundary(0, 6, 3), Some(6));
    }

    #[test]
    fn boundary_correction_leaves_real_indices_alone() {
        for index in 3..9 {
            assert_eq!(correct_boundary(index, 6, 3), None);
        }
    }

    #[test]
    fn boundary_correction_is_idempotent_once_applied() {
        for index in 0..12 {
            if let Some(corrected) = correct_boundary(index, 6, 3) {
                assert_eq!(
                    correct_boundary(corrected, 6, 3),
                    None,
                    "corrected index {corrected} must not need further correction"
                );
            }
        }
    }
}
