//! Utility functions for working with data slices

use ordered_float::OrderedFloat;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use sample_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by_key(|&x| OrderedFloat(x));
    sorted
}

/// Smallest and largest value of a slice
///
/// Returns `None` for empty slices. NaN compares greater than every number,
/// so callers should reject non-finite samples first.
///
/// # Examples
///
/// ```rust
/// use sample_core::utils::min_max;
///
/// assert_eq!(min_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
/// assert_eq!(min_max(&[]), None);
/// ```
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let min = data.iter().copied().map(OrderedFloat).min()?;
    let max = data.iter().copied().map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use sample_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use sample_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Check that every value is finite
pub fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        // input untouched
        assert_eq!(data, vec![3.0, 1.0, 5.0, 2.0, 4.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_nan_last() {
        let data = vec![2.0, f64::NAN, 1.0];
        let s = sorted(&data);
        assert_eq!(s[0], 1.0);
        assert_eq!(s[1], 2.0);
        assert!(s[2].is_nan());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[5.0]), Some((5.0, 5.0)));
        assert_eq!(min_max(&[2.0, -3.5, 9.0, 0.0]), Some((-3.5, 9.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0);
        // sample variance = 32 / 7
        assert_relative_eq!(std_dev(&data), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(std_dev(&[1.0]), 0.0);
        assert_eq!(std_dev(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_all_finite() {
        assert!(all_finite(&[1.0, -2.0]));
        assert!(all_finite(&[]));
        assert!(!all_finite(&[1.0, f64::INFINITY]));
        assert!(!all_finite(&[f64::NAN]));
    }
}
