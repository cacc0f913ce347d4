//! Eager, one-shot transformations over slices.
//!
//! Each function here runs a single [`crate::pipeline::Pipeline`] step over a borrowed slice and
//! returns an owned result, leaving the input untouched. Reach for these when one step is all
//! you need; chain a [`crate::pipeline::Pipeline`] when several steps should run lazily in one
//! pass.
//!
//! - [`filter()`], [`map()`], [`flat_map()`]
//! - [`sorted()`], [`sort_by()`], [`sort_with()`], [`distinct()`], [`distinct_by()`]
//! - [`skip()`], [`limit()`], [`take_while()`]
//! - [`reduce()`], [`reduce_with()`] with a built-in [`ReduceOp`]
//! - [`group_by()`], [`group_by_with()`]
//! - [`find_first()`], [`find_any()`], [`all_match()`], [`any_match()`], [`none_match()`],
//!   [`min_by()`], [`max_by()`], [`min_with()`], [`max_with()`]
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use rust_sequence_processing::processing::{filter, map, reduce_with, ReduceOp};
//! use rust_sequence_processing::types::sample_courses;
//!
//! let courses = sample_courses();
//!
//! // Highly rated courses only.
//! let top = filter(&courses, |c| c.review_score() > 95);
//!
//! // Their enrolment figures.
//! let students = map(&top, |c| c.number_of_students());
//!
//! let total = reduce_with(&students, ReduceOp::Sum).unwrap();
//! assert_eq!(total, Some(65_000));
//! ```

pub mod filter;
pub mod group;
pub mod map;
pub mod reduce;
pub mod search;
pub mod slice;
pub mod sort;

pub use filter::filter;
pub use group::{group_by, group_by_with};
pub use map::{flat_map, map};
pub use reduce::{reduce, reduce_with, ReduceOp};
pub use search::{
    all_match, any_match, find_any, find_first, max_by, max_with, min_by, min_with, none_match,
};
pub use slice::{limit, skip, take_while};
pub use sort::{distinct, distinct_by, sort_by, sort_with, sorted};
