use rust_sequence_processing::ordering::Comparator;
use rust_sequence_processing::pipeline::{collectors, Pipeline};
use rust_sequence_processing::processing;
use rust_sequence_processing::types::{sample_courses, Course};
use rust_sequence_processing::{require, PipelineError};

fn names<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a str> {
    courses.into_iter().map(Course::name).collect()
}

fn by_students_then_score_desc() -> Comparator<'static, Course> {
    Comparator::comparing(|c: &Course| c.number_of_students())
        .then_comparing(|c| c.review_score())
        .reversed()
}

#[test]
fn quantifiers_over_review_scores() {
    let courses = sample_courses();

    assert!(Pipeline::over(&courses).all_match(|c| c.review_score() > 90 || c.name() == "GCP"));
    assert!(!Pipeline::over(&courses).all_match(|c| c.review_score() > 90));
    assert!(!Pipeline::over(&courses).none_match(|c| c.review_score() > 95));
    assert!(Pipeline::over(&courses).any_match(|c| c.review_score() > 95));
    assert!(Pipeline::over(&courses).none_match(|c| c.review_score() > 100));
}

#[test]
fn sorting_by_students_then_reviews_reversed() {
    let sorted = Pipeline::over(sample_courses())
        .sorted_with(by_students_then_score_desc())
        .to_vec();
    assert_eq!(
        names(&sorted),
        vec!["Microservices", "Spring", "Spring Boot", "API", "AWS", "Azure", "GCP"]
    );

    let page = Pipeline::over(sample_courses())
        .sorted_with(by_students_then_score_desc())
        .skip(3)
        .limit(5)
        .to_vec();
    assert_eq!(names(&page), vec!["API", "AWS", "Azure", "GCP"]);
}

#[test]
fn ascending_student_sort_is_stable_for_ties() {
    let sorted = Pipeline::over(sample_courses())
        .sorted_with(Comparator::comparing(|c: &Course| c.number_of_students()))
        .to_vec();
    // Spring and Spring Boot tie on students and keep their input order.
    assert_eq!(
        names(&sorted),
        vec!["GCP", "Azure", "AWS", "API", "Spring", "Spring Boot", "Microservices"]
    );
}

#[test]
fn take_while_stops_at_the_first_low_score() {
    let prefix = Pipeline::over(sample_courses())
        .take_while(|c| c.review_score() >= 95)
        .to_vec();
    assert_eq!(names(&prefix), vec!["Spring", "Spring Boot"]);
}

#[test]
fn extrema_under_a_comparator() {
    let cmp = by_students_then_score_desc();

    let max = Pipeline::over(sample_courses()).max_with(&cmp).unwrap();
    let min = Pipeline::over(sample_courses()).min_with(&cmp).unwrap();
    // Under the reversed order the largest course has the fewest students.
    assert_eq!(max.name(), "GCP");
    assert_eq!(min.name(), "Microservices");

    let empty: Vec<Course> = Vec::new();
    assert_eq!(Pipeline::over(empty).max_with(&cmp), None);
}

#[test]
fn find_first_after_an_unmatched_filter_is_absent() {
    let none = Pipeline::over(sample_courses())
        .filter(|c| c.review_score() > 100)
        .find_first();
    assert_eq!(none, None);

    let err = require(none, "course rated above 100").unwrap_err();
    assert_eq!(
        err,
        PipelineError::MissingValue {
            what: "course rated above 100".to_string()
        }
    );
}

#[test]
fn students_and_averages_over_high_scores() {
    let high = |c: &Course| c.review_score() > 95;

    let total: i64 = Pipeline::over(sample_courses())
        .filter(high)
        .map(|c| c.number_of_students())
        .sum();
    assert_eq!(total, 65_000);

    let count = Pipeline::over(sample_courses()).filter(high).count();
    assert_eq!(count, 3);

    let max = Pipeline::over(sample_courses())
        .filter(high)
        .map(|c| c.number_of_students())
        .max();
    assert_eq!(max, Some(25_000));
}

#[test]
fn grouping_by_category() {
    let groups = Pipeline::over(sample_courses()).group_by(|c| c.category().to_string());
    assert_eq!(
        groups.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Framework", "Microservices", "Cloud"]
    );
    assert_eq!(names(&groups["Framework"]), vec!["Spring", "Spring Boot", "API"]);

    let counts = Pipeline::over(sample_courses())
        .group_by_with(|c| c.category().to_string(), collectors::counting());
    assert_eq!(counts["Framework"], 3);
    assert_eq!(counts["Microservices"], 1);
    assert_eq!(counts["Cloud"], 3);

    let best = Pipeline::over(sample_courses()).group_by_with(
        |c| c.category().to_string(),
        collectors::max_by(|a: &Course, b: &Course| a.review_score().cmp(&b.review_score())),
    );
    // Spring and Spring Boot tie at 98; the earlier one wins.
    assert_eq!(best["Framework"].as_ref().map(Course::name), Some("Spring"));
    assert_eq!(best["Cloud"].as_ref().map(Course::name), Some("AWS"));
}

#[test]
fn grouped_names_serialize_in_first_seen_order() {
    let picked: Vec<Course> = sample_courses()
        .into_iter()
        .filter(|c| matches!(c.name(), "Spring" | "AWS" | "GCP"))
        .collect();

    let groups = Pipeline::over(picked).group_by_with(
        |c| c.category().to_string(),
        collectors::mapping(|c: Course| c.name().to_string(), collectors::to_vec()),
    );
    assert_eq!(
        serde_json::to_string(&groups).unwrap(),
        r#"{"Framework":["Spring"],"Cloud":["AWS","GCP"]}"#
    );
}

#[test]
fn eager_and_lazy_forms_agree() {
    let courses = sample_courses();
    let cmp = by_students_then_score_desc();

    assert_eq!(
        processing::sort_with(&courses, &cmp),
        Pipeline::over(courses.clone()).sorted_with(by_students_then_score_desc()).to_vec()
    );
    assert_eq!(
        processing::take_while(&courses, |c| c.review_score() >= 95),
        Pipeline::over(courses.clone())
            .take_while(|c| c.review_score() >= 95)
            .to_vec()
    );
    assert_eq!(
        processing::max_with(&courses, &cmp),
        Pipeline::over(&courses).max_with(&Comparator::new(|a: &&Course, b: &&Course| {
            cmp.compare(a, b)
        }))
    );
}
