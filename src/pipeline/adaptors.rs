//! Stateful pipeline steps and sources that std's iterator adaptors do not cover.
//!
//! All of them are lazy: nothing is pulled from upstream, and no step function runs, until the
//! adaptor itself is pulled.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::vec;

/// Drops elements whose key was already seen, keeping the first occurrence.
#[must_use = "pipeline steps do nothing until a terminal operation runs"]
pub struct DistinctBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> DistinctBy<I, K, F> {
    pub(crate) fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iter, seen, key } = self;
        iter.find(|item| seen.insert(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// A sort barrier.
///
/// The first pull drains upstream into a buffer and sorts it stably; later pulls drain the
/// buffer.
#[must_use = "pipeline steps do nothing until a terminal operation runs"]
pub struct Sorted<I: Iterator, F> {
    source: Option<I>,
    cmp: F,
    sorted: vec::IntoIter<I::Item>,
}

impl<I: Iterator, F> Sorted<I, F> {
    pub(crate) fn new(iter: I, cmp: F) -> Self {
        Self {
            source: Some(iter),
            cmp,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<I, F> Iterator for Sorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            let mut buf: Vec<I::Item> = source.collect();
            buf.sort_by(&mut self.cmp);
            self.sorted = buf.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

/// Infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// `step` runs once per pulled element after the seed, on the element returned just before it.
#[must_use = "pipeline steps do nothing until a terminal operation runs"]
pub struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    step: F,
}

impl<T, F> Iterate<T, F> {
    pub(crate) fn new(seed: T, step: F) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            step,
        }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = match self.seed.take() {
            Some(seed) => seed,
            None => (self.step)(self.last.as_ref()?),
        };
        self.last = Some(item.clone());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{DistinctBy, Iterate, Sorted};

    #[test]
    fn distinct_by_keeps_first_occurrence_per_key() {
        let words = vec!["Spring", "spring", "API", "api", "AWS"];
        let out: Vec<_> = DistinctBy::new(words.into_iter(), |w: &&str| w.to_lowercase()).collect();
        assert_eq!(out, vec!["Spring", "API", "AWS"]);
    }

    #[test]
    fn sorted_does_not_pull_until_first_next() {
        let pulled = Cell::new(0);
        let upstream = [3, 1, 2].into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let mut sorted = Sorted::new(upstream, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(pulled.get(), 0);
        assert_eq!(sorted.next(), Some(1));
        assert_eq!(pulled.get(), 3);
        assert_eq!(sorted.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn iterate_runs_step_only_for_pulled_elements() {
        let calls = Cell::new(0);
        let mut powers = Iterate::new(1u64, |n: &u64| {
            calls.set(calls.get() + 1);
            n * 3
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(powers.next(), Some(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(powers.next(), Some(3));
        assert_eq!(powers.next(), Some(9));
        assert_eq!(calls.get(), 2);
    }
}
