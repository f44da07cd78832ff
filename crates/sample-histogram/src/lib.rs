//! Uniform-width histograms for sample data
//!
//! Bins a sample into equal-width buckets over an explicit range or one
//! derived from the sample, optionally weighting observations and normalising
//! the result to a density.
//!
//! # Default range
//!
//! Without an explicit range the sample range is padded by half a bin width
//! on each side, `k = (max - min) / (bins - 1) / 2`, so the extreme
//! observations sit in the middle of the outermost bins.
//!
//! # Examples
//!
//! ```rust
//! use sample_histogram::{histogram, HistogramOptions};
//!
//! let data = vec![1.0, 1.0, 2.0, 3.0, 3.0, 3.0];
//! let hist = histogram(&data, &HistogramOptions::default().with_bins(3)).unwrap();
//! assert_eq!(hist.counts(), vec![2.0, 1.0, 3.0]);
//! assert_eq!(hist.centers(), vec![1.0, 2.0, 3.0]);
//! ```
//!
//! ## Weighted density
//!
//! ```rust
//! use sample_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let hist = FixedWidthBuilder::new(4)
//!     .with_range(0.0, 4.0)
//!     .with_density(true)
//!     .build_weighted(&[0.5, 1.5, 3.5], &[2.0, 1.0, 1.0])
//!     .unwrap();
//! assert!((hist.integral() - 1.0).abs() < 1e-12);
//! ```

pub mod builders;
pub mod options;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{default_range, FixedWidthBuilder};
pub use options::HistogramOptions;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use sample_core::{Error, Result};

/// Bin `sample` according to `options`
///
/// # Errors
/// - empty sample or zero bins
/// - an explicit range that is not finite with `lo < hi`
/// - weights whose length differs from the sample, or negative weights
pub fn histogram(sample: &[f64], options: &HistogramOptions) -> Result<Histogram> {
    let builder = options.builder();
    match options.weights.as_deref() {
        Some(weights) => builder.build_weighted(sample, weights),
        None => builder.build(sample),
    }
}

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(sample: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(sample)
}
