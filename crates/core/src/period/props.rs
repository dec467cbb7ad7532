//! Property-based tests for the period bucketizer.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::service::PeriodBucketizer;

prop_compose! {
    /// An arbitrary anchor date well inside the representable range.
    fn arb_anchor()(year in 1990i32..2100, month in 1u32..=12, day in 1u32..=28) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

proptest! {
    /// For every window size N >= 1 the bucketizer yields exactly N
    /// buckets, contiguous and ascending, regardless of data sparsity.
    #[test]
    fn test_window_is_contiguous_ascending_and_exact(anchor in arb_anchor(), months in 1u32..=48) {
        let buckets = PeriodBucketizer::window(anchor, months).unwrap();

        prop_assert_eq!(buckets.len(), months as usize);

        for pair in buckets.windows(2) {
            // Contiguous: each bucket starts exactly where the previous ends.
            prop_assert_eq!(pair[1].start, pair[0].end);
            // Ascending and non-overlapping follow from contiguity.
            prop_assert!(pair[0].start < pair[1].start);
        }
    }

    /// The window always contains the anchor month as its last bucket.
    #[test]
    fn test_window_ends_at_month_containing_anchor(anchor in arb_anchor(), months in 1u32..=48) {
        let buckets = PeriodBucketizer::window(anchor, months).unwrap();
        let last = buckets.last().unwrap();

        prop_assert!(last.contains_date(anchor));
    }

    /// Every date belongs to at most one bucket of a window.
    #[test]
    fn test_buckets_never_overlap(anchor in arb_anchor(), months in 2u32..=24, probe in arb_anchor()) {
        let buckets = PeriodBucketizer::window(anchor, months).unwrap();
        let hits = buckets.iter().filter(|b| b.contains_date(probe)).count();

        prop_assert!(hits <= 1);
    }
}
