//! Property tests for the sort and search routines.

use proptest::prelude::*;

use sales_algorithms::{binary_search, linear_search, quicksort};

proptest! {
    #[test]
    fn quicksort_matches_std_sort(items in prop::collection::vec(-1000i64..1000, 0..200)) {
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(quicksort(&items), expected);
    }

    #[test]
    fn binary_search_agrees_with_linear(
        items in prop::collection::vec(-50i64..50, 0..100),
        target in -60i64..60,
    ) {
        let sorted = quicksort(&items);
        match binary_search(&sorted, &target) {
            Some(idx) => prop_assert_eq!(sorted[idx], target),
            None => prop_assert!(linear_search(&sorted, &target).is_none()),
        }
    }
}
