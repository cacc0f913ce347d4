//! Ways to start a [`Pipeline`].

use std::ops::{Range, RangeInclusive};

use crate::pipeline::{Iterate, Pipeline};

/// Pipeline over the given values, in order.
pub fn of<T>(values: Vec<T>) -> Pipeline<std::vec::IntoIter<T>> {
    Pipeline::over(values)
}

/// `start, start + 1, ..., end - 1`. Empty when `start >= end`.
pub fn range<T>(start: T, end: T) -> Pipeline<Range<T>>
where
    Range<T>: Iterator<Item = T>,
{
    Pipeline::new(start..end)
}

/// `start, start + 1, ..., end`. Empty when `start > end`.
pub fn range_closed<T>(start: T, end: T) -> Pipeline<RangeInclusive<T>>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    Pipeline::new(start..=end)
}

/// Infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// Must be bounded downstream with `limit` or `take_while`. `step` only runs when the next
/// element is pulled, so `limit(n)` calls it `n - 1` times.
pub fn iterate<T, F>(seed: T, step: F) -> Pipeline<Iterate<T, F>>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Pipeline::new(Iterate::new(seed, step))
}

#[cfg(test)]
mod tests {
    use super::{iterate, of, range, range_closed};

    #[test]
    fn ranges_are_half_open_and_closed() {
        assert_eq!(range(1, 10).sum(), 45);
        assert_eq!(range(1, 10).count(), 9);
        assert_eq!(range_closed(1, 10).sum(), 55);
        assert_eq!(range(5, 5).count(), 0);
        assert_eq!(range_closed(5, 4).count(), 0);
    }

    #[test]
    fn iterate_is_bounded_by_limit() {
        assert_eq!(iterate(1, |i| i + 2).limit(10).sum(), 100);
        assert_eq!(iterate(2, |i| i + 2).limit(10).sum(), 110);
        assert_eq!(iterate(2, |i| i * 2).limit(10).sum(), 2046);
    }

    #[test]
    fn iterate_under_limit_steps_one_less_than_the_limit() {
        let mut calls = 0;
        let out = iterate(1u64, |n| {
            calls += 1;
            n * 3
        })
        .limit(5)
        .to_vec();
        assert_eq!(out, vec![1, 3, 9, 27, 81]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn iterate_never_computes_past_the_limit() {
        // 10^9 is the last power of ten that fits in an i32; 10^10 would overflow.
        let powers = iterate(1i32, |n| n * 10).limit(10).to_vec();
        assert_eq!(powers.last(), Some(&1_000_000_000));
    }

    #[test]
    fn of_counts_values() {
        assert_eq!(of(vec![12, 9, 13, 14]).count(), 4);
    }
}
