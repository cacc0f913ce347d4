//! Sorting and de-duplication over slices.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::ordering::Comparator;
use crate::pipeline::Pipeline;

/// Stable sort by natural order.
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    Pipeline::over(items.iter().cloned()).sorted().to_vec()
}

/// Stable sort by `cmp`. Equal elements keep their input order.
pub fn sort_by<T, F>(items: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Pipeline::over(items.iter().cloned())
        .sorted_by(cmp)
        .to_vec()
}

/// Stable sort by a composable [`Comparator`].
pub fn sort_with<T: Clone>(items: &[T], cmp: &Comparator<'_, T>) -> Vec<T> {
    sort_by(items, |a, b| cmp.compare(a, b))
}

/// First occurrence of every distinct element, in input order.
pub fn distinct<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    Pipeline::over(items.iter().cloned()).distinct().to_vec()
}

/// First element for every distinct `key`, in input order.
pub fn distinct_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    Pipeline::over(items.iter().cloned())
        .distinct_by(key)
        .to_vec()
}
