//! Grouping over slices.

use std::hash::Hash;

use crate::pipeline::collectors::Collector;
use crate::pipeline::{Groups, Pipeline};

/// Partition `items` by `key`. Keys appear in first-seen order; members keep input order.
pub fn group_by<T, K, F>(items: &[T], key: F) -> Groups<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    Pipeline::over(items.iter().cloned()).group_by(key)
}

/// Partition `items` by `key` and fold every group with `downstream`.
pub fn group_by_with<T, K, F, C>(items: &[T], key: F, downstream: C) -> Groups<K, C::Output>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    C: Collector<T>,
{
    Pipeline::over(items.iter().cloned()).group_by_with(key, downstream)
}
