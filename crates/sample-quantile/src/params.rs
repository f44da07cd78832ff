//! Parameterisation of the continuous quantile estimators
//!
//! Every estimator interpolates between adjacent order statistics at the
//! 1-based position `h = a + p (n + 1 - a - b)`. The six variants differ only
//! in the plotting-position constants `(a, b)`.
//!
//! Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//! Packages", *The American Statistician* 50(4), types 4 to 9.

use sample_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects the `(a, b)` constants of a continuous quantile estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuousParam {
    /// Linear interpolation of the empirical CDF, `(0, 1)` (type 4)
    Cadpw,
    /// Piecewise linear with knots at mid-steps, `(1/2, 1/2)` (type 5)
    Hazen,
    /// `p`-th quantile at position `p (n + 1)`, `(0, 0)` (type 6, SPSS/Minitab)
    Spss,
    /// Range split into `n - 1` intervals, `(1, 1)` (type 7, S/R default)
    S,
    /// Approximately median-unbiased for any distribution, `(1/3, 1/3)` (type 8)
    MedianUnbiased,
    /// Approximately unbiased for normal samples, `(3/8, 3/8)` (type 9)
    NormalUnbiased,
}

impl Default for ContinuousParam {
    fn default() -> Self {
        Self::S
    }
}

impl ContinuousParam {
    /// All variants in Hyndman–Fan order
    pub const ALL: [ContinuousParam; 6] = [
        Self::Cadpw,
        Self::Hazen,
        Self::Spss,
        Self::S,
        Self::MedianUnbiased,
        Self::NormalUnbiased,
    ];

    /// Plotting-position constants `(a, b)`
    pub fn constants(self) -> (f64, f64) {
        match self {
            Self::Cadpw => (0.0, 1.0),
            Self::Hazen => (0.5, 0.5),
            Self::Spss => (0.0, 0.0),
            Self::S => (1.0, 1.0),
            Self::MedianUnbiased => (1.0 / 3.0, 1.0 / 3.0),
            Self::NormalUnbiased => (3.0 / 8.0, 3.0 / 8.0),
        }
    }

    /// Hyndman–Fan sample quantile type number
    pub fn hyndman_fan_type(self) -> u8 {
        match self {
            Self::Cadpw => 4,
            Self::Hazen => 5,
            Self::Spss => 6,
            Self::S => 7,
            Self::MedianUnbiased => 8,
            Self::NormalUnbiased => 9,
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Cadpw => "cadpw",
            Self::Hazen => "hazen",
            Self::Spss => "spss",
            Self::S => "s",
            Self::MedianUnbiased => "median_unbiased",
            Self::NormalUnbiased => "normal_unbiased",
        }
    }
}

impl fmt::Display for ContinuousParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContinuousParam {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|param| param.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown quantile parameter '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_s() {
        assert_eq!(ContinuousParam::default(), ContinuousParam::S);
        assert_eq!(ContinuousParam::default().constants(), (1.0, 1.0));
    }

    #[test]
    fn test_type_numbers_are_contiguous() {
        let types: Vec<u8> = ContinuousParam::ALL
            .iter()
            .map(|p| p.hyndman_fan_type())
            .collect();
        assert_eq!(types, vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_parse_round_trip() {
        for param in ContinuousParam::ALL {
            assert_eq!(param.to_string().parse::<ContinuousParam>().unwrap(), param);
        }
        assert_eq!("HAZEN".parse::<ContinuousParam>().unwrap(), ContinuousParam::Hazen);
        assert!("type7".parse::<ContinuousParam>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&ContinuousParam::MedianUnbiased).unwrap();
        assert_eq!(json, "\"median_unbiased\"");
        let parsed: ContinuousParam = serde_json::from_str("\"normal_unbiased\"").unwrap();
        assert_eq!(parsed, ContinuousParam::NormalUnbiased);
    }
}
