//! Searching, matching and extrema over slices.
//!
//! Everything here short-circuits where it can and borrows from the input instead of cloning.

use std::cmp::Ordering;

use crate::ordering::Comparator;
use crate::pipeline::Pipeline;

/// Earliest element satisfying `predicate`.
pub fn find_first<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items)
        .filter(|item| predicate(item))
        .find_first()
}

/// Some element satisfying `predicate`; sequentially this is the earliest one.
pub fn find_any<T, F>(items: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    find_first(items, predicate)
}

pub fn all_match<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items).all_match(predicate)
}

pub fn any_match<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items).any_match(predicate)
}

pub fn none_match<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items).none_match(predicate)
}

/// Smallest element under `cmp`; the earliest wins ties. `None` when empty.
pub fn min_by<T, F>(items: &[T], mut cmp: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    Pipeline::over(items).min_by(|a, b| cmp(a, b))
}

/// Largest element under `cmp`; the earliest wins ties. `None` when empty.
pub fn max_by<T, F>(items: &[T], mut cmp: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    Pipeline::over(items).max_by(|a, b| cmp(a, b))
}

pub fn min_with<'a, T>(items: &'a [T], cmp: &Comparator<'_, T>) -> Option<&'a T> {
    min_by(items, |a, b| cmp.compare(a, b))
}

pub fn max_with<'a, T>(items: &'a [T], cmp: &Comparator<'_, T>) -> Option<&'a T> {
    max_by(items, |a, b| cmp.compare(a, b))
}
