//! Core trait for quantile estimation

use sample_core::{utils, Error, Result};

/// Trait for estimators that turn a probability into a sample quantile
///
/// Implementors only provide [`quantile_sorted`](Self::quantile_sorted);
/// validation, sorting and the derived statistics come for free.
pub trait QuantileEstimator {
    /// Estimate the `p`-quantile from ascending order statistics
    ///
    /// `sorted` must be non-empty, finite and sorted; `p` must lie in `[0, 1]`.
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64>;

    /// Estimator name for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Estimate the `p`-quantile of an unsorted sample
    fn quantile(&self, sample: &[f64], p: f64) -> Result<f64> {
        let sorted = validated_sorted(sample)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate several quantiles, sorting the sample once
    fn quantiles(&self, sample: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        let sorted = validated_sorted(sample)?;
        ps.iter().map(|&p| self.quantile_sorted(&sorted, p)).collect()
    }

    /// Interquartile range `Q(0.75) - Q(0.25)`
    fn iqr(&self, sample: &[f64]) -> Result<f64> {
        let sorted = validated_sorted(sample)?;
        self.iqr_sorted(&sorted)
    }

    /// Interquartile range from ascending order statistics
    fn iqr_sorted(&self, sorted: &[f64]) -> Result<f64> {
        let q1 = self.quantile_sorted(sorted, 0.25)?;
        let q3 = self.quantile_sorted(sorted, 0.75)?;
        Ok(q3 - q1)
    }
}

/// Reject empty or non-finite samples and return their order statistics
pub(crate) fn validated_sorted(sample: &[f64]) -> Result<Vec<f64>> {
    Error::check_non_empty(sample)?;
    if !utils::all_finite(sample) {
        return Err(Error::non_finite("sample"));
    }
    Ok(utils::sorted(sample))
}
