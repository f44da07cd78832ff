//! Sample statistics toolkit
//!
//! Umbrella crate re-exporting the workspace crates:
//!
//! - [`sample_rank`]: fractional ranks with tie handling and tie correction
//! - [`sample_quantile`]: continuous quantile estimators (Hyndman-Fan types 4 to 9)
//! - [`sample_histogram`]: uniform-width histograms with optional weights and densities
//! - [`sample_resample`]: Fisher-Yates shuffling, sampling and bootstrap resamples
//! - [`sample_kde`]: Gaussian kernel density estimation with rule-of-thumb bandwidths
//!
//! All crates share [`Error`] and [`Result`] from [`sample_core`].
//!
//! # Example
//!
//! ```rust
//! use sample_stats::prelude::*;
//!
//! let data = vec![2.0, 4.0, 4.0, 5.0, 7.0, 9.0];
//!
//! let ranks = rank(&data, TiesStrategy::Average);
//! assert_eq!(ranks.ranks, vec![1.0, 2.5, 2.5, 4.0, 5.0, 6.0]);
//!
//! let q = continuous_by(&data, ContinuousParam::Hazen, 0.5).unwrap();
//! assert_eq!(q, 4.5);
//!
//! let hist = histogram(&data, &HistogramOptions::default().with_bins(4)).unwrap();
//! assert_eq!(hist.total(), 6.0);
//!
//! let pdf = estimate_pdf(&data, &KdeOptions::default()).unwrap();
//! assert_eq!(pdf.grid.len(), 512);
//! ```

pub use sample_core;
pub use sample_histogram;
pub use sample_kde;
pub use sample_quantile;
pub use sample_rank;
pub use sample_resample;

pub use sample_core::{Error, RandomSource, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use sample_core::{default_source, seeded, Error, RandomSource, Result};
    pub use sample_histogram::{histogram, Histogram, HistogramBuilder, HistogramOptions};
    pub use sample_kde::{estimate_pdf, Bandwidth, BandwidthRule, DensityEstimate, KdeOptions};
    pub use sample_quantile::{
        continuous_by, iqr, median, quantile, quantiles, ContinuousParam, QuantileEstimator,
    };
    pub use sample_rank::{rank, RankResult, TiesStrategy};
    pub use sample_resample::{sample, shuffle, Resampler, SampleOptions};
}
