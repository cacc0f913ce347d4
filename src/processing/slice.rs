//! Positional slicing over slices.

use crate::pipeline::Pipeline;

/// Everything after the first `n` elements; empty if `n >= items.len()`.
pub fn skip<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    Pipeline::over(items.iter().cloned()).skip(n).to_vec()
}

/// At most the first `n` elements.
pub fn limit<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    Pipeline::over(items.iter().cloned()).limit(n).to_vec()
}

/// Longest prefix whose elements all satisfy `predicate`.
///
/// `predicate` is not called for anything after the first element that fails it.
pub fn take_while<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items.iter().cloned())
        .take_while(predicate)
        .to_vec()
}
