//! Checked integer arithmetic for pipeline steps.
//!
//! Fixed-width folds report overflow as [`PipelineError::Overflow`] instead of wrapping, and
//! division by zero as [`PipelineError::DivisionByZero`]. When an exact large result is the
//! point (factorials beyond 20!), use [`factorial_exact`], which folds over [`BigUint`].

use num_bigint::BigUint;

use crate::error::{PipelineError, PipelineResult};
use crate::sources;

/// `a / b`, failing on a zero divisor or `i64::MIN / -1`.
pub fn checked_div(a: i64, b: i64) -> PipelineResult<i64> {
    if b == 0 {
        return Err(PipelineError::division_by_zero(format!("{a} / {b}")));
    }
    a.checked_div(b)
        .ok_or_else(|| PipelineError::overflow(format!("{a} / {b}")))
}

/// `a % b`, failing on a zero divisor or `i64::MIN % -1`.
pub fn checked_rem(a: i64, b: i64) -> PipelineResult<i64> {
    if b == 0 {
        return Err(PipelineError::division_by_zero(format!("{a} % {b}")));
    }
    a.checked_rem(b)
        .ok_or_else(|| PipelineError::overflow(format!("{a} % {b}")))
}

/// Sum of all values, or `Overflow` as soon as a partial sum leaves the `i64` range.
pub fn checked_sum<I>(values: I) -> PipelineResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(0i64, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| PipelineError::overflow(format!("sum ({acc} + {v})")))
    })
}

/// Product of all values (1 for an empty input), or `Overflow`.
pub fn checked_product<I>(values: I) -> PipelineResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(1i64, |acc, v| {
        acc.checked_mul(v)
            .ok_or_else(|| PipelineError::overflow(format!("product ({acc} * {v})")))
    })
}

/// `n!` in `u64`. 20! is the largest factorial that fits.
pub fn factorial(n: u64) -> PipelineResult<u64> {
    sources::range_closed(1, n).try_reduce(1u64, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| PipelineError::overflow(format!("factorial({n})")))
    })
}

/// Exact `n!` for any `n`.
pub fn factorial_exact(n: u64) -> BigUint {
    sources::range_closed(1, n)
        .map(BigUint::from)
        .reduce(BigUint::from(1u8), |acc, k| acc * k)
}
