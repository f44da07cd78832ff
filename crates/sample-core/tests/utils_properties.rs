//! Property-based tests for the slice utilities

use proptest::prelude::*;
use sample_core::utils::{min_max, sorted, std_dev};

proptest! {
    #[test]
    fn prop_sorted_is_ordered_permutation(data in prop::collection::vec(-1e6f64..1e6, 0..200)) {
        let s = sorted(&data);
        prop_assert_eq!(s.len(), data.len());
        for w in s.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
        let mut a = data.clone();
        a.sort_by(|x, y| x.partial_cmp(y).unwrap());
        prop_assert_eq!(a, s);
    }

    #[test]
    fn prop_min_max_bounds(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let (lo, hi) = min_max(&data).unwrap();
        prop_assert!(data.iter().all(|&x| lo <= x && x <= hi));
        prop_assert!(data.contains(&lo));
        prop_assert!(data.contains(&hi));
    }

    #[test]
    fn prop_std_dev_shift_invariant(
        data in prop::collection::vec(-1e3f64..1e3, 2..100),
        shift in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
        let a = std_dev(&data);
        let b = std_dev(&shifted);
        prop_assert!((a - b).abs() <= 1e-6 * (1.0 + a));
    }
}
