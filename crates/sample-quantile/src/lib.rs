//! Continuous sample quantile estimation
//!
//! This crate implements the six continuous quantile estimators of Hyndman &
//! Fan (types 4 to 9). Each is a linear interpolation between adjacent order
//! statistics; they differ only in where the interpolation position lands,
//! which is selected by a [`ContinuousParam`].
//!
//! # Features
//!
//! - **Six named estimators**: CADPW, Hazen, SPSS, S (default), median-unbiased
//!   and normal-unbiased
//! - **Batch evaluation**: [`quantiles`] sorts once for many probabilities
//! - **IQR**: [`iqr`] / [`iqr_by`] built on the same estimators
//! - **Generic seam**: [`QuantileEstimator`] lets callers accept any estimator
//!
//! # Example
//!
//! ```rust
//! use sample_quantile::{continuous_by, iqr, quantile, ContinuousParam};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(quantile(&data, 0.5).unwrap(), 2.5);
//! assert_eq!(continuous_by(&data, ContinuousParam::Spss, 0.25).unwrap(), 1.25);
//! assert_eq!(iqr(&data).unwrap(), 1.5);
//! ```

pub mod estimators;
pub mod params;
pub mod traits;

pub use estimators::{
    continuous_by, continuous_sorted, iqr, iqr_by, median, quantile, quantiles,
};
pub use params::ContinuousParam;
pub use traits::QuantileEstimator;

pub use sample_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ContinuousParam, Error, QuantileEstimator, Result};
}
