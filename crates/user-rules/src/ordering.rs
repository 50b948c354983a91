//! In-place, comparator-driven ordering of record slices.
//!
//! The sort repeatedly scans adjacent pairs and swaps any pair the comparator
//! reports as strictly out of order, finishing after a pass with no swaps.
//! Equal elements are never swapped, so the sort is stable. It uses no extra
//! allocation and makes O(n²) comparisons in the worst case.

use std::cmp::Ordering;

use tracing::debug;

/// Sort `records` in place so they are non-decreasing under `compare`.
///
/// `compare` must be a total order; a sorted slice is left untouched after a
/// single pass.
///
/// # Examples
///
/// ```
/// use user_rules::{User, sort_by};
///
/// let mut users = vec![
///     User::new("charlie", "charlie@mail.com", "123", 30).expect("valid user"),
///     User::new("alice", "alice@mail.com", "123", 28).expect("valid user"),
///     User::new("bob", "bob@mail.com", "123", 25).expect("valid user"),
/// ];
///
/// sort_by(&mut users, |left, right| left.username().cmp(right.username()));
///
/// let names: Vec<&str> = users.iter().map(User::username).collect();
/// assert_eq!(names, ["alice", "bob", "charlie"]);
/// ```
pub fn sort_by<T, F>(records: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut passes = 0_usize;
    let mut swaps = 0_usize;
    loop {
        passes += 1;
        let mut swapped = false;
        for upper in 1..records.len() {
            let lower = upper - 1;
            let out_of_order = match (records.get(lower), records.get(upper)) {
                (Some(left), Some(right)) => compare(left, right) == Ordering::Greater,
                _ => false,
            };
            if out_of_order {
                records.swap(lower, upper);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }
    debug!(len = records.len(), passes, swaps, "records sorted");
}

/// Sort `records` in place by the key `key` extracts.
///
/// Stable, with the same algorithm as [`sort_by`].
pub fn sort_by_key<T, K, F>(records: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(records, |left, right| key(left).cmp(&key(right)));
}

#[cfg(test)]
mod tests {
    //! Covers ordering, stability and idempotence of the exchange sort.

    use rstest::rstest;

    use super::*;

    fn is_non_decreasing<T: Ord>(values: &[T]) -> bool {
        values.windows(2).all(|pair| match pair {
            [left, right] => left <= right,
            _ => true,
        })
    }

    fn sorted_copy(values: &[i32]) -> Vec<i32> {
        let mut copy = values.to_vec();
        copy.sort_unstable();
        copy
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![7])]
    #[case(vec![2, 1])]
    #[case(vec![5, 4, 3, 2, 1])]
    #[case(vec![3, 1, 2, 3, 1, 2])]
    #[case(vec![-4, 10, 0, -4, 9, 1, 1, 8])]
    fn output_is_ordered_permutation(#[case] input: Vec<i32>) {
        let mut values = input.clone();

        sort_by(&mut values, Ord::cmp);

        assert!(is_non_decreasing(&values));
        assert_eq!(values, sorted_copy(&input));
    }

    #[rstest]
    fn sorted_input_is_unchanged_and_compared_once_per_pair() {
        let mut values = vec![1, 2, 3, 4, 5];
        let mut comparisons = 0;

        sort_by(&mut values, |left, right| {
            comparisons += 1;
            left.cmp(right)
        });

        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert_eq!(comparisons, 4);
    }

    #[rstest]
    fn equal_keys_keep_their_relative_order() {
        let mut records = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];

        sort_by_key(&mut records, |record| record.0);

        assert_eq!(records, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn sorting_twice_equals_sorting_once() {
        let mut once = vec![9, 3, 7, 3, 1];
        sort_by(&mut once, Ord::cmp);
        let mut twice = once.clone();

        sort_by(&mut twice, Ord::cmp);

        assert_eq!(once, twice);
    }

    #[rstest]
    fn reversed_comparator_sorts_descending() {
        let mut values = vec![1, 3, 2];

        sort_by(&mut values, |left, right| right.cmp(left));

        assert_eq!(values, [3, 2, 1]);
    }
}
