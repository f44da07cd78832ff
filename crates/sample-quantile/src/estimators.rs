//! Continuous quantile estimators
//!
//! Sorts the sample into order statistics `x_1..x_n` and linearly
//! interpolates between `x_j` and `x_{j+1}` at the position chosen by the
//! [`ContinuousParam`]'s plotting-position constants.

use crate::params::ContinuousParam;
use crate::traits::QuantileEstimator;
use sample_core::{Error, Result};
use tracing::trace;

impl QuantileEstimator for ContinuousParam {
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64> {
        Error::check_non_empty(sorted)?;
        Error::check_probability(p)?;

        let n = sorted.len();
        if n == 1 {
            return Ok(sorted[0]);
        }

        let (a, b) = self.constants();
        let n_f = n as f64;
        let h = (a + p * (n_f + 1.0 - a - b)).clamp(1.0, n_f);
        let j = h.floor();
        let g = h - j;
        // 1-based position of the lower order statistic
        let j = j as usize;

        let lo = sorted[j - 1];
        if j >= n {
            return Ok(lo);
        }
        let hi = sorted[j];
        trace!(param = %self, p, h, "interpolating order statistics");

        // Rounding must not push the estimate outside [x_j, x_{j+1}]
        Ok((lo + g * (hi - lo)).max(lo).min(hi))
    }

    fn name(&self) -> &'static str {
        ContinuousParam::name(*self)
    }
}

/// Quantile of `sample` at probability `p` using the estimator `param`
///
/// # Errors
/// - [`Error::InsufficientData`] for an empty sample
/// - [`Error::InvalidParameter`] when `p` is NaN or outside `[0, 1]`
/// - [`Error::InvalidInput`] when the sample holds NaN or infinite values
///
/// # Examples
///
/// ```rust
/// use sample_quantile::{continuous_by, ContinuousParam};
///
/// let q = continuous_by(&[4.0, 1.0, 3.0, 2.0], ContinuousParam::S, 0.5).unwrap();
/// assert_eq!(q, 2.5);
/// ```
pub fn continuous_by(sample: &[f64], param: ContinuousParam, p: f64) -> Result<f64> {
    param.quantile(sample, p)
}

/// Quantile of already sorted order statistics
///
/// Skips the sort; `sorted` must be ascending and finite.
pub fn continuous_sorted(sorted: &[f64], param: ContinuousParam, p: f64) -> Result<f64> {
    param.quantile_sorted(sorted, p)
}

/// Quantile with the default estimator ([`ContinuousParam::S`])
pub fn quantile(sample: &[f64], p: f64) -> Result<f64> {
    continuous_by(sample, ContinuousParam::default(), p)
}

/// Several quantiles of one sample, sorting it only once
pub fn quantiles(sample: &[f64], param: ContinuousParam, ps: &[f64]) -> Result<Vec<f64>> {
    param.quantiles(sample, ps)
}

/// Median with the default estimator
pub fn median(sample: &[f64]) -> Result<f64> {
    quantile(sample, 0.5)
}

/// Interquartile range `Q(0.75) - Q(0.25)` under `param`
pub fn iqr_by(sample: &[f64], param: ContinuousParam) -> Result<f64> {
    param.iqr(sample)
}

/// Interquartile range with the default estimator
pub fn iqr(sample: &[f64]) -> Result<f64> {
    iqr_by(sample, ContinuousParam::default())
}
