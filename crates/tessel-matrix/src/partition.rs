//! Balanced contiguous partitioning.

use crate::error::{MatrixError, Result};

/// Split `items` into at most `max_groups` contiguous, near-equal groups.
///
/// With `n = min(len, max_groups)` and `base = ceil(len / n)`: a zero
/// remainder of `len % n` means all `n` groups take `base` items; otherwise
/// the first `len % n` groups take `base` and the rest take `base - 1`.
/// Groups keep input order, no group is empty, and the same input always
/// produces the same partition.
pub fn partition<T: Clone>(items: &[T], max_groups: usize) -> Result<Vec<Vec<T>>> {
    if max_groups == 0 {
        return Err(MatrixError::InvalidCapacity);
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let len = items.len();
    let groups = len.min(max_groups);
    let base = len.div_ceil(groups);
    let remainder = len % groups;

    let mut out = Vec::with_capacity(groups);
    let mut offset = 0;
    for index in 0..groups {
        let size = if remainder == 0 || index < remainder {
            base
        } else {
            base - 1
        };
        out.push(items[offset..offset + size].to_vec());
        offset += size;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::partition;
    use crate::error::MatrixError;

    fn sizes(groups: &[Vec<u32>]) -> Vec<usize> {
        groups.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_ten_items_three_groups_skews_first() {
        let items: Vec<u32> = (1..=10).collect();
        let groups = partition(&items, 3).unwrap();
        assert_eq!(sizes(&groups), vec![4, 3, 3]);
        assert_eq!(groups[0], vec![1, 2, 3, 4]);
        assert_eq!(groups[2], vec![8, 9, 10]);
    }

    #[test]
    fn test_nine_items_three_groups_even() {
        let items: Vec<u32> = (1..=9).collect();
        let groups = partition(&items, 3).unwrap();
        assert_eq!(sizes(&groups), vec![3, 3, 3]);
    }

    #[test]
    fn test_fewer_items_than_groups() {
        let items = vec![1, 2];
        let groups = partition(&items, 5).unwrap();
        assert_eq!(sizes(&groups), vec![1, 1]);
    }

    #[test]
    fn test_single_group_takes_everything() {
        let items: Vec<u32> = (1..=7).collect();
        let groups = partition(&items, 1).unwrap();
        assert_eq!(groups, vec![items]);
    }

    #[test]
    fn test_empty_items_yield_no_groups() {
        let groups = partition::<u32>(&[], 4).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = partition(&[1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidCapacity));
    }

    proptest! {
        #[test]
        fn test_partition_conserves_items(
            items in prop::collection::vec(any::<u32>(), 0..200),
            max_groups in 1usize..20,
        ) {
            let groups = partition(&items, max_groups).unwrap();
            let flattened: Vec<u32> = groups.iter().flatten().copied().collect();
            prop_assert_eq!(flattened, items);
        }

        #[test]
        fn test_partition_is_balanced(
            items in prop::collection::vec(any::<u32>(), 1..200),
            max_groups in 1usize..20,
        ) {
            let groups = partition(&items, max_groups).unwrap();
            let min = groups.iter().map(Vec::len).min().unwrap();
            let max = groups.iter().map(Vec::len).max().unwrap();
            prop_assert!(max - min <= 1);
        }

        #[test]
        fn test_partition_respects_group_cap(
            items in prop::collection::vec(any::<u32>(), 1..200),
            max_groups in 1usize..20,
        ) {
            let groups = partition(&items, max_groups).unwrap();
            prop_assert_eq!(groups.len(), items.len().min(max_groups));
            prop_assert!(groups.iter().all(|g| !g.is_empty()));
        }
    }
}
