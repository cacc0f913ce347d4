//! Property-based tests for the pipeline steps.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_sequence_processing::pipeline::Pipeline;
use rust_sequence_processing::processing;

proptest! {
    /// Filter output is the subsequence of matching elements, in input order.
    #[test]
    fn filter_is_an_ordered_subsequence(values in prop::collection::vec(-50i64..50, 0..64)) {
        let kept = Pipeline::over(values.clone()).filter(|n| n % 3 == 0).to_vec();

        let mut rest = values.iter();
        for k in &kept {
            prop_assert!(k % 3 == 0);
            prop_assert!(rest.any(|v| v == k));
        }
        prop_assert_eq!(kept.len(), values.iter().filter(|n| *n % 3 == 0).count());
    }

    /// Distinct keeps the first occurrence of every value and nothing else.
    #[test]
    fn distinct_keeps_first_occurrences(values in prop::collection::vec(0u8..16, 0..64)) {
        let out = Pipeline::over(values.clone()).distinct().to_vec();

        let unique: HashSet<u8> = values.iter().copied().collect();
        prop_assert_eq!(out.len(), unique.len());

        let mut seen = HashSet::new();
        let firsts: Vec<u8> = values.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(out, firsts);
    }

    /// Sorting twice equals sorting once.
    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let once = Pipeline::over(values).sorted().to_vec();
        let twice = Pipeline::over(once.clone()).sorted().to_vec();
        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(once, twice);
    }

    /// Equal keys keep their input order.
    #[test]
    fn sort_is_stable(keys in prop::collection::vec(0u8..4, 0..64)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().zip(0..).collect();
        let sorted = Pipeline::over(tagged).sorted_by(|a, b| a.0.cmp(&b.0)).to_vec();

        for w in sorted.windows(2) {
            prop_assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                prop_assert!(w[0].1 < w[1].1);
            }
        }
    }

    /// Skip and limit partition the input.
    #[test]
    fn skip_and_limit_partition(values in prop::collection::vec(any::<i16>(), 0..32), n in 0usize..40) {
        let mut joined = Pipeline::over(values.clone()).limit(n).to_vec();
        joined.extend(Pipeline::over(values.clone()).skip(n));
        prop_assert_eq!(joined, values);
    }

    /// The lazy pipeline and the eager slice functions agree.
    #[test]
    fn lazy_and_eager_agree(values in prop::collection::vec(-20i64..20, 0..48)) {
        prop_assert_eq!(
            Pipeline::over(values.clone()).take_while(|n| *n < 10).to_vec(),
            processing::take_while(&values, |n| *n < 10)
        );
        prop_assert_eq!(
            Pipeline::over(values.clone()).distinct().sorted().to_vec(),
            processing::sorted(&processing::distinct(&values))
        );
        prop_assert_eq!(
            Pipeline::over(values.clone()).min(),
            processing::min_by(&values, |a, b| a.cmp(b)).copied()
        );
    }
}
