//! Composable total orders.
//!
//! A [`Comparator`] wraps a `Fn(&T, &T) -> Ordering` and can be chained with secondary keys and
//! reversed as a whole:
//!
//! ```rust
//! use rust_sequence_processing::ordering::Comparator;
//! use rust_sequence_processing::types::{sample_courses, Course};
//!
//! // Most students first; ties broken by the higher review score.
//! let cmp = Comparator::comparing(|c: &Course| c.number_of_students())
//!     .then_comparing(|c| c.review_score())
//!     .reversed();
//!
//! let mut courses = sample_courses();
//! courses.sort_by(|a, b| cmp.compare(a, b));
//! assert_eq!(courses[0].name(), "Microservices");
//! ```

use std::cmp::Ordering;
use std::fmt;

type CompareFn<'a, T> = dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a;

/// A boxed, composable comparison function over `T`.
pub struct Comparator<'a, T> {
    cmp: Box<CompareFn<'a, T>>,
}

impl<'a, T: 'a> Comparator<'a, T> {
    /// Wrap an arbitrary comparison function.
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        Self { cmp: Box::new(cmp) }
    }

    /// Order by a key extracted from each element.
    pub fn comparing<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    /// Order elements by their own [`Ord`] implementation.
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }

    /// Break ties of `self` with a second key.
    pub fn then_comparing<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.then_comparing_by(Self::comparing(key))
    }

    /// Break ties of `self` with another comparator.
    pub fn then_comparing_by(self, next: Comparator<'a, T>) -> Self {
        let first = self.cmp;
        let second = next.cmp;
        Self::new(move |a, b| first(a, b).then_with(|| second(a, b)))
    }

    /// Reverse the whole order, including any secondary keys chained so far.
    pub fn reversed(self) -> Self {
        let inner = self.cmp;
        Self::new(move |a, b| inner(b, a))
    }

    /// Compare two elements.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Consume the comparator into a plain closure, e.g. for `slice::sort_by`.
    pub fn into_fn(self) -> impl Fn(&T, &T) -> Ordering + Send + Sync + 'a {
        move |a, b| (self.cmp)(a, b)
    }
}

impl<T> fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::Comparator;
    use crate::types::{sample_courses, Course};

    #[test]
    fn comparing_orders_by_key() {
        let cmp = Comparator::comparing(|s: &&str| s.len());
        assert_eq!(cmp.compare(&"API", &"Spring"), Ordering::Less);
        assert_eq!(cmp.compare(&"AWS", &"PCF"), Ordering::Equal);
    }

    #[test]
    fn then_comparing_breaks_ties_only() {
        let cmp = Comparator::comparing(|c: &Course| c.category().to_string())
            .then_comparing(|c| c.review_score());
        let courses = sample_courses();
        // Same category, different score.
        assert_eq!(cmp.compare(&courses[4], &courses[6]), Ordering::Greater);
        // Different category decides regardless of score.
        assert_eq!(cmp.compare(&courses[6], &courses[0]), Ordering::Less);
    }

    #[test]
    fn reversed_flips_the_entire_chain() {
        let mut courses = sample_courses();
        let cmp = Comparator::comparing(|c: &Course| c.number_of_students())
            .then_comparing(|c| c.review_score())
            .reversed();
        courses.sort_by(cmp.into_fn());
        let names: Vec<_> = courses.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Microservices",
                "Spring",
                "Spring Boot",
                "API",
                "AWS",
                "Azure",
                "GCP"
            ]
        );
    }

    #[test]
    fn natural_matches_ord() {
        let cmp = Comparator::<i64>::natural();
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.reversed().compare(&1, &2), Ordering::Greater);
    }
}
