//! Downstream collectors for grouping and custom terminals.
//!
//! A [`Collector`] describes how to fold elements into a result in three phases: create an empty
//! accumulator, feed it elements in order, finish it into the output. Grouping keeps one
//! accumulator per key, so the same collector works for a whole sequence
//! ([`super::Pipeline::collect_with`]) and per group ([`super::Pipeline::group_by_with`]).

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::Add;

/// A three-phase fold over elements of type `T`.
pub trait Collector<T> {
    /// Mutable state built up while elements arrive.
    type Acc;
    /// Finished result.
    type Output;

    fn init(&self) -> Self::Acc;
    fn accumulate(&mut self, acc: &mut Self::Acc, item: T);
    fn finish(&mut self, acc: Self::Acc) -> Self::Output;
}

/// Collect elements into a `Vec` in arrival order.
pub fn to_vec<T>() -> ToVec<T> {
    ToVec(PhantomData)
}

/// Count elements.
pub fn counting() -> Counting {
    Counting
}

/// Largest element under `cmp`; ties keep the earliest element. `None` for an empty input.
pub fn max_by<T, F>(cmp: F) -> MaxBy<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    MaxBy(cmp)
}

/// Smallest element under `cmp`; ties keep the earliest element. `None` for an empty input.
pub fn min_by<T, F>(cmp: F) -> MinBy<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    MinBy(cmp)
}

/// Sum a numeric projection of every element.
pub fn summing<T, N, F>(f: F) -> Summing<F, N>
where
    N: Add<Output = N> + Default,
    F: FnMut(&T) -> N,
{
    Summing(f, PhantomData)
}

/// Transform elements before handing them to `downstream`.
pub fn mapping<T, U, F, C>(f: F, downstream: C) -> Mapping<F, C>
where
    F: FnMut(T) -> U,
    C: Collector<U>,
{
    Mapping { f, downstream }
}

pub struct ToVec<T>(PhantomData<fn(T)>);

impl<T> Collector<T> for ToVec<T> {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&mut self, acc: &mut Vec<T>, item: T) {
        acc.push(item);
    }

    fn finish(&mut self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

pub struct Counting;

impl<T> Collector<T> for Counting {
    type Acc = usize;
    type Output = usize;

    fn init(&self) -> usize {
        0
    }

    fn accumulate(&mut self, acc: &mut usize, _item: T) {
        *acc += 1;
    }

    fn finish(&mut self, acc: usize) -> usize {
        acc
    }
}

pub struct MaxBy<F>(F);

impl<T, F> Collector<T> for MaxBy<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn init(&self) -> Option<T> {
        None
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        let replace = match acc {
            Some(best) => (self.0)(&item, best) == Ordering::Greater,
            None => true,
        };
        if replace {
            *acc = Some(item);
        }
    }

    fn finish(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

pub struct MinBy<F>(F);

impl<T, F> Collector<T> for MinBy<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn init(&self) -> Option<T> {
        None
    }

    fn accumulate(&mut self, acc: &mut Option<T>, item: T) {
        let replace = match acc {
            Some(best) => (self.0)(&item, best) == Ordering::Less,
            None => true,
        };
        if replace {
            *acc = Some(item);
        }
    }

    fn finish(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

pub struct Summing<F, N>(F, PhantomData<fn() -> N>);

impl<T, N, F> Collector<T> for Summing<F, N>
where
    N: Add<Output = N> + Default,
    F: FnMut(&T) -> N,
{
    type Acc = N;
    type Output = N;

    fn init(&self) -> N {
        N::default()
    }

    fn accumulate(&mut self, acc: &mut N, item: T) {
        let current = std::mem::take(acc);
        *acc = current + (self.0)(&item);
    }

    fn finish(&mut self, acc: N) -> N {
        acc
    }
}

pub struct Mapping<F, C> {
    f: F,
    downstream: C,
}

impl<T, U, F, C> Collector<T> for Mapping<F, C>
where
    F: FnMut(T) -> U,
    C: Collector<U>,
{
    type Acc = C::Acc;
    type Output = C::Output;

    fn init(&self) -> C::Acc {
        self.downstream.init()
    }

    fn accumulate(&mut self, acc: &mut C::Acc, item: T) {
        let mapped = (self.f)(item);
        self.downstream.accumulate(acc, mapped);
    }

    fn finish(&mut self, acc: C::Acc) -> C::Output {
        self.downstream.finish(acc)
    }
}
