//! Console walkthrough of the pipeline vocabulary over the demonstration data.
//!
//! Prints one labelled line (or block) per demonstration. The exact text is illustrative.

use std::error::Error;

use rust_sequence_processing::execution::{ExecutionEngine, ExecutionOptions};
use rust_sequence_processing::numeric::{factorial, factorial_exact};
use rust_sequence_processing::ordering::Comparator;
use rust_sequence_processing::pipeline::{collectors, Pipeline};
use rust_sequence_processing::require;
use rust_sequence_processing::sources::{self, iterate, range, range_closed};
use rust_sequence_processing::types::{sample_course_names, sample_courses, sample_numbers, Course};

fn main() -> Result<(), Box<dyn Error>> {
    numbers();
    course_names();
    courses()?;
    generators();
    factorials()?;
    parallel()?;
    Ok(())
}

fn section(title: &str) {
    println!();
    println!("== {title} ==");
}

fn numbers() {
    section("numbers");
    let numbers = sample_numbers();

    let evens = Pipeline::over(numbers.clone())
        .filter(|n| n % 2 == 0)
        .to_vec();
    println!("Even numbers: {evens:?}");

    let squares = Pipeline::over(numbers.clone())
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .to_vec();
    println!("Squares of even numbers: {squares:?}");

    println!(
        "Sum >> {}",
        Pipeline::over(numbers.clone()).reduce(0, |a, b| a + b)
    );
    println!("Count of numbers: {}", Pipeline::over(numbers.clone()).count());
    println!(
        "Minimum value: {}",
        Pipeline::over(numbers.clone()).min().unwrap_or(0)
    );
    println!(
        "Maximum value: {}",
        Pipeline::over(numbers.clone()).max().unwrap_or(0)
    );

    let distinct_desc = Pipeline::over(numbers)
        .distinct()
        .sorted_by(|a, b| b.cmp(a))
        .to_vec();
    println!("Distinct, descending: {distinct_desc:?}");
}

fn course_names() {
    section("course names");
    let names = sample_course_names();

    let spring = Pipeline::over(names.clone())
        .filter(|c| c.len() >= 4)
        .filter(|c| c.starts_with('S'))
        .to_vec();
    println!("Names starting with S: {spring:?}");

    Pipeline::over(names.clone())
        .map(|c| format!("{c}, {}", c.len()))
        .for_each(|line| println!("{line}"));

    let alphabetical = Pipeline::over(names.clone()).distinct().sorted().to_vec();
    println!("Alphabetical: {alphabetical:?}");

    let by_length = Pipeline::over(names.clone())
        .distinct()
        .sorted_with(Comparator::comparing(|s: &&str| s.len()))
        .map(|s| s.to_lowercase())
        .to_vec();
    println!("By length, lowercased: {by_length:?}");

    println!("Joined courses: {}", Pipeline::over(names.clone()).joining(" "));

    let chars = Pipeline::over(names.clone())
        .flat_map(|c| c.chars())
        .to_vec();
    println!("List of characters: {chars:?}");

    let distinct_chars = Pipeline::over(names)
        .flat_map(|c| c.chars())
        .distinct()
        .to_vec();
    println!("Distinct characters: {distinct_chars:?}");
}

fn courses() -> Result<(), Box<dyn Error>> {
    section("courses");
    let courses = sample_courses();
    let above_95 = |c: &Course| c.review_score() > 95;
    let above_90 = |c: &Course| c.review_score() > 90;

    println!(
        "All courses have a review score greater than 90: {}",
        Pipeline::over(&courses).all_match(|c| above_90(c))
    );
    println!(
        "No courses have a review score greater than 90: {}",
        Pipeline::over(&courses).none_match(|c| above_90(c))
    );
    println!(
        "Any course has a review score greater than 90: {}",
        Pipeline::over(&courses).any_match(|c| above_90(c))
    );

    let by_students_then_score = || {
        Comparator::comparing(|c: &Course| c.number_of_students())
            .then_comparing(|c| c.review_score())
            .reversed()
    };

    let page = Pipeline::over(courses.clone())
        .sorted_with(by_students_then_score())
        .skip(2)
        .limit(5)
        .joining(", ");
    println!("Sorted by students and reviews (skip 2, limit 5): [{page}]");

    let prefix = Pipeline::over(courses.clone())
        .take_while(|c| c.review_score() >= 95)
        .joining(", ");
    println!("Leading courses scoring at least 95: [{prefix}]");

    let cmp = by_students_then_score();
    let max = Pipeline::over(courses.clone()).max_with(&cmp);
    let min = Pipeline::over(courses.clone()).min_with(&cmp);
    println!("Max under reversed students/reviews: {max:?}");
    println!("Min under reversed students/reviews: {min:?}");

    let first = Pipeline::over(courses.clone())
        .filter(|c| above_95(c))
        .find_first();
    let any = Pipeline::over(courses.clone())
        .filter(|c| above_95(c))
        .find_any();
    println!("First course above 95: {}", display_or_absent(first.as_ref()));
    println!("Any course above 95: {}", display_or_absent(any.as_ref()));

    let students: i64 = Pipeline::over(courses.clone())
        .filter(|c| above_95(c))
        .map(|c| c.number_of_students())
        .sum();
    println!("Students in courses above 95: {students}");

    let grouped = Pipeline::over(courses.clone()).group_by_with(
        |c| c.category().to_string(),
        collectors::mapping(|c: Course| c.name().to_string(), collectors::to_vec()),
    );
    println!("Courses grouped by category: {}", serde_json::to_string(&grouped)?);

    let counts = Pipeline::over(courses.clone())
        .group_by_with(|c| c.category().to_string(), collectors::counting());
    println!("Courses per category: {}", serde_json::to_string(&counts)?);

    let best = Pipeline::over(courses.clone()).group_by_with(
        |c| c.category().to_string(),
        collectors::max_by(|a: &Course, b: &Course| a.review_score().cmp(&b.review_score())),
    );
    println!("Highest rated per category: {}", serde_json::to_string(&best)?);

    let spring = require(
        Pipeline::over(courses)
            .filter(|c| c.name() == "Spring")
            .find_first(),
        "course named Spring",
    )?;
    println!("Spring as JSON: {}", serde_json::to_string(&spring)?);
    Ok(())
}

fn display_or_absent(course: Option<&Course>) -> String {
    course.map_or_else(|| "<absent>".to_string(), Course::to_string)
}

fn generators() {
    section("generators");
    println!("Count of 12, 9, 13, 14: {}", sources::of(vec![12, 9, 13, 14]).count());
    println!("range(1, 10): {:?}", range(1, 10).to_vec());
    println!("Sum of range(1, 10): {}", range(1, 10).sum());
    println!("Sum of range_closed(1, 10): {}", range_closed(1, 10).sum());

    let odds = iterate(1, |i| i + 2)
        .limit(10)
        .peek(|n| println!("  odd {n}"))
        .sum();
    println!("Sum of first ten odd numbers: {odds}");

    let evens = iterate(2, |i| i + 2).limit(10).sum();
    println!("Sum of first ten even numbers: {evens}");

    let powers = iterate(2, |i| i * 2).limit(10).to_vec();
    println!("Powers of two: {powers:?}");
}

fn factorials() -> Result<(), Box<dyn Error>> {
    section("factorials");
    println!("Factorial of 20: {}", factorial(20)?);
    match factorial(21) {
        Ok(v) => println!("Factorial of 21: {v}"),
        Err(e) => println!("Factorial of 21 in u64: {e}"),
    }
    println!("Factorial of 50: {}", factorial_exact(50));
    Ok(())
}

fn parallel() -> Result<(), Box<dyn Error>> {
    section("parallel");
    let engine = ExecutionEngine::new(ExecutionOptions {
        chunk_size: 3,
        ..ExecutionOptions::default()
    })?;
    let numbers = sample_numbers();
    println!("Parallel sum: {}", engine.sum_parallel(&numbers)?);
    println!(
        "Parallel count of evens: {}",
        engine.count_parallel(&numbers, |n| n % 2 == 0)
    );
    println!(
        "Parallel any > 14: {}",
        engine.any_match_parallel(&numbers, |n| *n > 14)
    );
    println!(
        "Sequential first > 12: {:?}",
        engine.find_first(&numbers, |n| *n > 12)
    );
    println!("Last run: {}", engine.metrics().snapshot());
    Ok(())
}
