//! Eager one-to-one and one-to-many mapping over slices.

use crate::pipeline::Pipeline;

/// Returns `transform` applied to every element, preserving order and length.
pub fn map<T, U, F>(items: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    Pipeline::over(items).map(transform).to_vec()
}

/// Returns the concatenation, in order, of `expand` applied to every element.
pub fn flat_map<T, U, I, F>(items: &[T], expand: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    Pipeline::over(items).flat_map(expand).to_vec()
}

#[cfg(test)]
mod tests {
    use super::{flat_map, map};
    use crate::types::{sample_course_names, sample_numbers};

    #[test]
    fn map_squares_every_number() {
        let numbers = sample_numbers();
        let out = map(&numbers, |n| n * n);
        assert_eq!(out, vec![144, 81, 169, 16, 36, 4, 16, 144, 225]);
        assert_eq!(out.len(), numbers.len());
    }

    #[test]
    fn map_appends_name_lengths() {
        let names = sample_course_names();
        let out = map(&names[..3], |c| format!("{c}, {}", c.len()));
        assert_eq!(out, vec!["Spring, 6", "Spring Boot, 11", "API, 3"]);
    }

    #[test]
    fn flat_map_splits_names_into_characters() {
        let out = flat_map(&["AWS", "PCF"], |c| c.chars().collect::<Vec<_>>());
        assert_eq!(out, vec!['A', 'W', 'S', 'P', 'C', 'F']);
    }

    #[test]
    fn flat_map_of_empty_expansions_is_empty() {
        let out: Vec<i64> = flat_map(&sample_numbers(), |_| Vec::new());
        assert!(out.is_empty());
    }
}
