//! Eager filtering over slices.

use crate::pipeline::Pipeline;

/// Returns the elements of `items` for which `predicate` returns `true`, in their original order.
///
/// This is a convenience wrapper around [`Pipeline::filter`]; `items` is left untouched.
pub fn filter<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    Pipeline::over(items.iter().cloned())
        .filter(predicate)
        .to_vec()
}
