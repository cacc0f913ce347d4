//! Core data model types.
//!
//! Pipelines are generic over their element type; the only record type the crate ships is
//! [`Course`], the payload used throughout the demonstrations and tests. The fixed demonstration
//! inputs live here too so tests, benches and the demo binary share them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable course record.
///
/// Built once through [`Course::new`]; fields are exposed through read accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    name: String,
    category: String,
    review_score: i32,
    number_of_students: i64,
}

impl Course {
    /// Create a new course.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        review_score: i32,
        number_of_students: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            review_score,
            number_of_students,
        }
    }

    /// Course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course category (used as the usual grouping key).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Review score, typically 0..=100.
    pub fn review_score(&self) -> i32 {
        self.review_score
    }

    /// Number of enrolled students.
    pub fn number_of_students(&self) -> i64 {
        self.number_of_students
    }
}

/// Renders as `name:students:score`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.name, self.number_of_students, self.review_score
        )
    }
}

/// The demonstration number list.
pub fn sample_numbers() -> Vec<i64> {
    vec![12, 9, 13, 4, 6, 2, 4, 12, 15]
}

/// The demonstration course-name list.
pub fn sample_course_names() -> Vec<&'static str> {
    vec![
        "Spring",
        "Spring Boot",
        "API",
        "Microservices",
        "AWS",
        "PCF",
        "Azure",
        "Docker",
        "Kubernetes",
    ]
}

/// The demonstration course catalog.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::new("Spring", "Framework", 98, 20_000),
        Course::new("Spring Boot", "Framework", 98, 20_000),
        Course::new("API", "Framework", 94, 10_000),
        Course::new("Microservices", "Microservices", 96, 25_000),
        Course::new("AWS", "Cloud", 91, 2_000),
        Course::new("Azure", "Cloud", 91, 1_000),
        Course::new("GCP", "Cloud", 90, 400),
    ]
}
