//! `rust-sequence-processing` is a small library of functional-style collection processing over
//! in-memory sequences: filter, map, sort, de-duplicate, slice, group, reduce and search.
//!
//! The primary entrypoint is [`pipeline::Pipeline`], a lazy chain of steps evaluated only when a
//! terminal operation runs. Short-circuiting terminals (`find_first`, `any_match`, `take_while`
//! and friends) stop pulling elements as soon as their answer is known.
//!
//! ## What's in the box
//!
//! - [`pipeline`]: the lazy [`pipeline::Pipeline`], grouping results ([`pipeline::Groups`]) and
//!   downstream [`pipeline::collectors`]
//! - [`processing`]: eager one-shot versions of every step over slices
//! - [`ordering`]: composable comparators (`comparing`, `then_comparing`, `reversed`)
//! - [`sources`]: `of`, `range`, `range_closed`, `iterate`
//! - [`numeric`]: checked division/remainder/sum/product and exact factorials
//! - [`execution`]: optional parallel evaluation for order-insensitive terminals, with observers
//!   and live metrics
//! - [`types`]: the immutable [`types::Course`] record and demonstration data
//! - [`error`]: [`PipelineError`] and [`PipelineResult`]
//!
//! ## Quick example: courses
//!
//! ```rust
//! use rust_sequence_processing::pipeline::{collectors, Pipeline};
//! use rust_sequence_processing::types::{sample_courses, Course};
//!
//! // Total students in courses rated above 95.
//! let students: i64 = Pipeline::over(sample_courses())
//!     .filter(|c| c.review_score() > 95)
//!     .map(|c| c.number_of_students())
//!     .sum();
//! assert_eq!(students, 65_000);
//!
//! // Course names per category, categories in first-seen order.
//! let by_category = Pipeline::over(sample_courses()).group_by_with(
//!     |c| c.category().to_string(),
//!     collectors::mapping(|c: Course| c.name().to_string(), collectors::to_vec()),
//! );
//! assert_eq!(by_category["Cloud"], vec!["AWS", "Azure", "GCP"]);
//! ```
//!
//! ## Quick example: numbers
//!
//! ```rust
//! use rust_sequence_processing::numeric::{checked_div, factorial, factorial_exact};
//! use rust_sequence_processing::pipeline::Pipeline;
//! use rust_sequence_processing::PipelineError;
//!
//! let numbers = vec![12, 9, 13, 4, 6, 2, 4, 12, 15];
//! assert_eq!(Pipeline::over(numbers.clone()).reduce(0, |a, b| a + b), 77);
//!
//! // Fallible steps abort the pipeline with a typed error.
//! let halves: Result<Vec<i64>, _> = Pipeline::over(numbers)
//!     .try_map(|n| checked_div(n, 0))
//!     .try_collect();
//! assert!(matches!(halves, Err(PipelineError::DivisionByZero { .. })));
//!
//! assert!(factorial(21).is_err());
//! assert_eq!(factorial_exact(25).to_string(), "15511210043330985984000000");
//! ```
//!
//! ### Error semantics
//!
//! - Division/remainder by zero and missing values are [`PipelineError`]s, never panics.
//! - Fixed-width overflow in checked folds is [`PipelineError::Overflow`].
//! - `min`/`max` of an empty sequence is `None`, not an error.

pub mod error;
pub mod execution;
pub mod numeric;
pub mod ordering;
pub mod pipeline;
pub mod processing;
pub mod sources;
pub mod types;

pub use error::{require, PipelineError, PipelineResult};
