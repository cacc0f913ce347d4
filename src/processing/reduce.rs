//! Reductions over slices.

use crate::error::PipelineResult;
use crate::numeric;
use crate::pipeline::Pipeline;

/// Built-in integer reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Number of values.
    Count,
    /// Checked sum; overflow is an error.
    Sum,
    /// Smallest value; absent for an empty input.
    Min,
    /// Largest value; absent for an empty input.
    Max,
}

/// Left fold of `items` starting at `identity`.
///
/// Elements are combined strictly left to right, so non-commutative `combine` functions give
/// deterministic results.
pub fn reduce<T, A, F>(items: &[T], identity: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    Pipeline::over(items).reduce(identity, combine)
}

/// Reduce integers using a built-in [`ReduceOp`].
///
/// - `Count` and `Sum` always return `Some` (`Sum` of nothing is `0`).
/// - `Min`/`Max` return `None` for an empty slice.
/// - `Sum` returns [`crate::PipelineError::Overflow`] if the total leaves the `i64` range.
pub fn reduce_with(values: &[i64], op: ReduceOp) -> PipelineResult<Option<i64>> {
    let values = Pipeline::over(values.iter().copied());
    Ok(match op {
        ReduceOp::Count => Some(values.count() as i64),
        ReduceOp::Sum => Some(numeric::checked_sum(values)?),
        ReduceOp::Min => values.min(),
        ReduceOp::Max => values.max(),
    })
}
