//! Rank assignment with tie resolution

use crate::types::{RankResult, TiesStrategy};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use tracing::trace;

/// Rank a sample under its natural ordering
///
/// NaN values rank after every number and tie with each other; `-0.0` and
/// `0.0` tie.
///
/// # Examples
///
/// ```rust
/// use sample_rank::{rank, TiesStrategy};
///
/// let result = rank(&[1.0, 2.0, 2.0, 3.0], TiesStrategy::Average);
/// assert_eq!(result.ranks, vec![1.0, 2.5, 2.5, 4.0]);
/// assert!(result.correction < 1.0);
/// ```
pub fn rank(values: &[f64], ties: TiesStrategy) -> RankResult {
    rank_by(values, ties, |a, b| OrderedFloat(*a).cmp(&OrderedFloat(*b)))
}

/// Rank a sample under a caller-supplied ordering
///
/// Indices are stable-sorted with `cmp`, then every maximal run of elements
/// comparing [`Ordering::Equal`] receives the rank chosen by `ties`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
pub fn rank_by<T, F>(values: &[T], ties: TiesStrategy, mut cmp: F) -> RankResult
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = values.len();
    if n <= 1 {
        return RankResult {
            correction: 1.0,
            ranks: vec![1.0; n],
        };
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| cmp(&values[a], &values[b]));

    let mut ranks = vec![0.0; n];
    let mut tie_sum = 0.0;
    let mut tie_groups = 0usize;

    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && cmp(&values[order[start]], &values[order[end]]) == Ordering::Equal {
            end += 1;
        }

        let shared = ties.resolve(start + 1, end);
        for &idx in &order[start..end] {
            ranks[idx] = shared;
        }

        let t = (end - start) as f64;
        if end - start > 1 {
            tie_sum += t * t * t - t;
            tie_groups += 1;
        }
        start = end;
    }

    let n_f = n as f64;
    let correction = 1.0 - tie_sum / (n_f * n_f * n_f - n_f);
    trace!(n, tie_groups, correction, ?ties, "ranked sample");

    RankResult { correction, ranks }
}

/// Tie-correction factor `1 - Σ(t³ - t) / (n³ - n)` over groups of `t` equal values
pub fn tie_correction(values: &[f64]) -> f64 {
    rank(values, TiesStrategy::Average).correction
}
