//! Bandwidth selection
//!
//! Rule-of-thumb bandwidths scale a robust spread estimate by `n^(-1/5)`:
//!
//! ```text
//! h = c · min(sd, IQR / 1.34) · n^(-1/5)
//! ```
//!
//! with `c = 0.9` (Silverman) or `c = 1.06` (Scott). `IQR / 1.34` is the
//! standard deviation of a normal distribution with that interquartile range.

use sample_core::{utils, Error, Result};
use sample_quantile::{ContinuousParam, QuantileEstimator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// IQR of the standard normal distribution
const NORMAL_IQR: f64 = 1.34;

/// Rule-of-thumb bandwidth selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandwidthRule {
    /// Silverman's rule, `c = 0.9`
    #[default]
    Silverman,
    /// Scott's rule, `c = 1.06`
    Scott,
}

impl BandwidthRule {
    /// Multiplier `c` applied to the spread estimate
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Silverman => 0.9,
            Self::Scott => 1.06,
        }
    }

    /// Bandwidth of `sample` under this rule
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] for fewer than two observations
    /// - [`Error::InvalidInput`] when the sample holds NaN or infinite values
    /// - [`Error::Degenerate`] when the sample has no spread at all
    pub fn select(self, sample: &[f64]) -> Result<f64> {
        Error::check_len(sample, 2)?;
        if !utils::all_finite(sample) {
            return Err(Error::non_finite("sample"));
        }

        let sd = utils::std_dev(sample);
        let iqr = ContinuousParam::S.iqr(sample)? / NORMAL_IQR;
        let spread = match (sd > 0.0, iqr > 0.0) {
            (true, true) => sd.min(iqr),
            (true, false) => {
                warn!(sd, "interquartile range is zero, using the standard deviation");
                sd
            }
            (false, true) => {
                warn!(iqr, "standard deviation is zero, using the interquartile range");
                iqr
            }
            (false, false) => {
                return Err(Error::Degenerate(
                    "sample has zero spread, bandwidth would be zero".to_string(),
                ))
            }
        };

        let h = self.multiplier() * spread * (sample.len() as f64).powf(-0.2);
        debug!(rule = %self, sd, iqr, h, "selected bandwidth");
        Ok(h)
    }
}

impl fmt::Display for BandwidthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silverman => write!(f, "silverman"),
            Self::Scott => write!(f, "scott"),
        }
    }
}

/// How the smoothing bandwidth is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bandwidth {
    /// Derive it from the sample with a rule of thumb
    Rule(BandwidthRule),
    /// Use this bandwidth as is
    Fixed(f64),
}

impl Default for Bandwidth {
    fn default() -> Self {
        Self::Rule(BandwidthRule::default())
    }
}

impl From<BandwidthRule> for Bandwidth {
    fn from(rule: BandwidthRule) -> Self {
        Self::Rule(rule)
    }
}

impl Bandwidth {
    /// Concrete bandwidth for `sample`
    pub fn resolve(self, sample: &[f64]) -> Result<f64> {
        match self {
            Self::Rule(rule) => rule.select(sample),
            Self::Fixed(h) if h.is_finite() && h > 0.0 => Ok(h),
            Self::Fixed(h) => Err(Error::InvalidParameter(format!(
                "bandwidth must be finite and positive, got {h}"
            ))),
        }
    }
}

/// Silverman's rule-of-thumb bandwidth
pub fn silverman(sample: &[f64]) -> Result<f64> {
    BandwidthRule::Silverman.select(sample)
}

/// Scott's rule-of-thumb bandwidth
pub fn scott(sample: &[f64]) -> Result<f64> {
    BandwidthRule::Scott.select(sample)
}
