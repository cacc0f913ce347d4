//! Lazy sequence pipelines.
//!
//! A [`Pipeline`] wraps an iterator and offers the usual stream vocabulary on top of it:
//! intermediate steps (`filter`, `map`, `flat_map`, `distinct`, `sorted_by`, `skip`, `limit`,
//! `take_while`, `peek`) return a new pipeline without running anything; terminal operations
//! (`collect`, `for_each`, `reduce`, `find_first`, the quantifiers, `min_by`/`max_by`,
//! `group_by`, ...) pull elements through the chain.
//!
//! Short-circuiting terminals stop pulling as soon as the answer is known, so a `peek` hook only
//! ever sees elements that were actually needed:
//!
//! ```rust
//! use rust_sequence_processing::pipeline::Pipeline;
//!
//! let mut seen = Vec::new();
//! let first_big = Pipeline::over([12, 9, 13, 4, 6])
//!     .peek(|n| seen.push(*n))
//!     .filter(|n| *n > 10)
//!     .find_first();
//!
//! assert_eq!(first_big, Some(12));
//! assert_eq!(seen, vec![12]);
//! ```
//!
//! Fallible steps are expressed with [`Pipeline::try_map`] / [`Pipeline::try_reduce`]; the first
//! error aborts evaluation and is returned to the caller.

mod adaptors;
pub mod collectors;
mod groups;

use std::cmp::Ordering;
use std::fmt::{self, Display, Write as _};
use std::hash::Hash;
use std::iter::{Filter, FlatMap, Inspect, Map, Skip, Take, TakeWhile};
use std::ops::Add;

use crate::error::PipelineResult;
use crate::numeric;
use crate::ordering::Comparator;

pub use adaptors::{DistinctBy, Iterate, Sorted};
pub use collectors::Collector;
pub use groups::Groups;

/// A lazy chain of steps over an ordered sequence.
#[must_use = "pipelines do nothing until a terminal operation runs"]
#[derive(Clone)]
pub struct Pipeline<I> {
    iter: I,
}

impl<I: Iterator> Pipeline<I> {
    /// Start a pipeline over any iterator.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Start a pipeline over anything iterable.
    pub fn over<C>(source: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self::new(source.into_iter())
    }

    // ---- intermediate steps ----------------------------------------------------------------

    /// Keep elements for which `predicate` holds. Order is preserved.
    pub fn filter<P>(self, predicate: P) -> Pipeline<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Pipeline::new(self.iter.filter(predicate))
    }

    /// Convert every element one-to-one.
    pub fn map<U, F>(self, transform: F) -> Pipeline<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Pipeline::new(self.iter.map(transform))
    }

    /// Convert every element into zero or more elements, concatenated in order.
    pub fn flat_map<U, F>(self, expand: F) -> Pipeline<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Pipeline::new(self.iter.flat_map(expand))
    }

    /// Fallible one-to-one conversion.
    ///
    /// Elements become `PipelineResult<U>`; use [`Pipeline::try_collect`] (or any terminal on the
    /// results) to stop at the first error.
    pub fn try_map<U, F>(self, transform: F) -> Pipeline<Map<I, F>>
    where
        F: FnMut(I::Item) -> PipelineResult<U>,
    {
        Pipeline::new(self.iter.map(transform))
    }

    /// Observe elements as they are pulled through, without changing them.
    pub fn peek<F>(self, observer: F) -> Pipeline<Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Pipeline::new(self.iter.inspect(observer))
    }

    /// Drop later duplicates; equality is on the whole element.
    pub fn distinct(self) -> Pipeline<DistinctBy<I, I::Item, fn(&I::Item) -> I::Item>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Pipeline::new(DistinctBy::new(
            self.iter,
            <I::Item as Clone>::clone as fn(&I::Item) -> I::Item,
        ))
    }

    /// Drop later elements whose `key` was already seen.
    pub fn distinct_by<K, F>(self, key: F) -> Pipeline<DistinctBy<I, K, F>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Pipeline::new(DistinctBy::new(self.iter, key))
    }

    /// Stable sort by the elements' natural order.
    pub fn sorted(self) -> Pipeline<Sorted<I, fn(&I::Item, &I::Item) -> Ordering>>
    where
        I::Item: Ord,
    {
        Pipeline::new(Sorted::new(
            self.iter,
            <I::Item as Ord>::cmp as fn(&I::Item, &I::Item) -> Ordering,
        ))
    }

    /// Stable sort by a comparison function.
    pub fn sorted_by<F>(self, cmp: F) -> Pipeline<Sorted<I, F>>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        Pipeline::new(Sorted::new(self.iter, cmp))
    }

    /// Stable sort by a [`Comparator`].
    pub fn sorted_with<'a>(
        self,
        cmp: Comparator<'a, I::Item>,
    ) -> Pipeline<Sorted<I, impl Fn(&I::Item, &I::Item) -> Ordering + 'a>>
    where
        I::Item: 'a,
    {
        self.sorted_by(cmp.into_fn())
    }

    /// Drop the first `n` elements (fewer if the sequence is shorter).
    pub fn skip(self, n: usize) -> Pipeline<Skip<I>> {
        Pipeline::new(self.iter.skip(n))
    }

    /// Keep at most `n` elements.
    pub fn limit(self, n: usize) -> Pipeline<Take<I>> {
        Pipeline::new(self.iter.take(n))
    }

    /// Longest prefix for which `predicate` holds. Nothing after the first failing element is
    /// pulled.
    pub fn take_while<P>(self, predicate: P) -> Pipeline<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Pipeline::new(self.iter.take_while(predicate))
    }

    // ---- terminal operations ---------------------------------------------------------------

    /// Collect into any [`FromIterator`] container.
    pub fn collect<C: FromIterator<I::Item>>(self) -> C {
        self.iter.collect()
    }

    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.iter.for_each(action)
    }

    /// Left fold starting at `identity`. Elements are combined strictly in order.
    pub fn reduce<A, F>(self, identity: A, combine: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter.fold(identity, combine)
    }

    /// Left fold whose combining step can fail; stops at the first error.
    pub fn try_reduce<A, F>(mut self, identity: A, combine: F) -> PipelineResult<A>
    where
        F: FnMut(A, I::Item) -> PipelineResult<A>,
    {
        self.iter.try_fold(identity, combine)
    }

    /// Earliest remaining element, if any.
    pub fn find_first(mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Any remaining element.
    ///
    /// Sequential pipelines have no reason to pick anything but the first, so this is the same as
    /// [`Pipeline::find_first`].
    pub fn find_any(self) -> Option<I::Item> {
        self.find_first()
    }

    /// `true` if every element satisfies `predicate` (vacuously `true` when empty).
    pub fn all_match<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.all(predicate)
    }

    /// `true` if some element satisfies `predicate` (`false` when empty).
    pub fn any_match<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }

    /// `true` if no element satisfies `predicate` (`true` when empty).
    pub fn none_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Smallest element under `cmp`, the earliest one on ties.
    pub fn min_by<F>(self, mut cmp: F) -> Option<I::Item>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        self.iter.fold(None, |best, item| match best {
            Some(b) if cmp(&item, &b) != Ordering::Less => Some(b),
            _ => Some(item),
        })
    }

    /// Largest element under `cmp`, the earliest one on ties.
    pub fn max_by<F>(self, mut cmp: F) -> Option<I::Item>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        self.iter.fold(None, |best, item| match best {
            Some(b) if cmp(&item, &b) != Ordering::Greater => Some(b),
            _ => Some(item),
        })
    }

    /// [`Pipeline::min_by`] with a [`Comparator`].
    pub fn min_with(self, cmp: &Comparator<'_, I::Item>) -> Option<I::Item> {
        self.min_by(|a, b| cmp.compare(a, b))
    }

    /// [`Pipeline::max_by`] with a [`Comparator`].
    pub fn max_with(self, cmp: &Comparator<'_, I::Item>) -> Option<I::Item> {
        self.max_by(|a, b| cmp.compare(a, b))
    }

    /// Smallest element by natural order.
    pub fn min(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.min_by(|a, b| a.cmp(b))
    }

    /// Largest element by natural order.
    pub fn max(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.max_by(|a, b| a.cmp(b))
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Sum with the element type's own `+`, starting from its default (zero).
    ///
    /// Fixed-width integers wrap or panic on overflow according to the build profile; use
    /// [`Pipeline::try_sum`] when overflow must be reported.
    pub fn sum(self) -> I::Item
    where
        I::Item: Add<Output = I::Item> + Default,
    {
        self.iter.fold(I::Item::default(), |acc, x| acc + x)
    }

    /// Concatenate the display form of every element, separated by `separator`.
    pub fn joining(self, separator: &str) -> String
    where
        I::Item: Display,
    {
        let mut out = String::new();
        for (i, item) in self.iter.enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{item}");
        }
        out
    }

    /// Run a [`Collector`] over the whole sequence.
    pub fn collect_with<C>(self, mut collector: C) -> C::Output
    where
        C: Collector<I::Item>,
    {
        let mut acc = collector.init();
        for item in self.iter {
            collector.accumulate(&mut acc, item);
        }
        collector.finish(acc)
    }

    /// Partition elements by `key`; each group keeps its members in input order.
    pub fn group_by<K, F>(self, key: F) -> Groups<K, Vec<I::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.group_by_with(key, collectors::to_vec())
    }

    /// Partition elements by `key` and fold each group with `downstream`.
    pub fn group_by_with<K, F, C>(self, mut key: F, mut downstream: C) -> Groups<K, C::Output>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        C: Collector<I::Item>,
    {
        let mut groups: Groups<K, C::Acc> = Groups::new();
        for item in self.iter {
            let k = key(&item);
            let acc = groups.entry_or_insert_with(k, || downstream.init());
            downstream.accumulate(acc, item);
        }
        groups.map_values(|acc| downstream.finish(acc))
    }
}

impl<I> Pipeline<I>
where
    I: Iterator<Item = i64>,
{
    /// Checked integer sum; overflow is reported instead of wrapping.
    pub fn try_sum(self) -> PipelineResult<i64> {
        numeric::checked_sum(self.iter)
    }

    /// Checked integer product; overflow is reported instead of wrapping.
    pub fn try_product(self) -> PipelineResult<i64> {
        numeric::checked_product(self.iter)
    }
}

impl<I, T> Pipeline<I>
where
    I: Iterator<Item = PipelineResult<T>>,
{
    /// Collect successful elements, or return the first error.
    ///
    /// Nothing after the failing element is pulled.
    pub fn try_collect<C: FromIterator<T>>(self) -> PipelineResult<C> {
        self.iter.collect()
    }
}

impl<I: Iterator> IntoIterator for Pipeline<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iter
    }
}

impl<I> fmt::Debug for Pipeline<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}
