//! Kernel density estimation for univariate samples
//!
//! Smooths a sample into a continuous density with a Gaussian (or
//! Epanechnikov) kernel and evaluates it on an evenly spaced grid. The
//! bandwidth comes from Silverman's or Scott's rule of thumb unless fixed
//! explicitly.
//!
//! # Features
//!
//! - `parallel`: evaluate the grid with rayon
//!
//! # Example
//!
//! ```rust
//! use sample_kde::{estimate_pdf, KdeOptions};
//!
//! let data = vec![-1.2, -0.4, 0.0, 0.3, 0.8, 1.5];
//! let pdf = estimate_pdf(&data, &KdeOptions::default()).unwrap();
//! assert_eq!(pdf.grid.len(), 512);
//! assert!(pdf.density.iter().all(|&d| d >= 0.0));
//! ```

pub mod bandwidth;
pub mod estimator;
pub mod kernel;
pub mod options;
pub mod types;

pub use bandwidth::{scott, silverman, Bandwidth, BandwidthRule};
pub use estimator::{linspace, Kde};
pub use kernel::{Epanechnikov, Gaussian, Kernel, KernelKind};
pub use options::KdeOptions;
pub use types::DensityEstimate;

pub use sample_core::{Error, Result};

use sample_core::utils;
use tracing::{debug, instrument};

/// Estimate the density of `sample` on a grid described by `options`
///
/// The grid spans `[min - cushion·h, max + cushion·h]` with `options.points`
/// values, `h` being the resolved bandwidth.
///
/// # Errors
/// - fewer than two grid points or a negative cushion
/// - empty or non-finite sample
/// - a rule bandwidth on fewer than two observations or a constant sample
/// - a fixed bandwidth that is not finite and positive
#[instrument(skip(sample, options), fields(n = sample.len(), points = options.points))]
pub fn estimate_pdf(sample: &[f64], options: &KdeOptions) -> Result<DensityEstimate> {
    options.validate()?;
    let kde = Kde::new(sample, options.kernel, options.bandwidth)?;
    let h = kde.bandwidth();

    let (min, max) = utils::min_max(sample).ok_or_else(Error::empty_input)?;
    let lo = min - options.cushion * h;
    let hi = max + options.cushion * h;
    debug!(bandwidth = h, lo, hi, kernel = options.kernel.name(), "evaluating density grid");

    let grid = linspace(lo, hi, options.points);
    let density = kde.map(&grid);

    Ok(DensityEstimate {
        grid,
        density,
        bandwidth: h,
    })
}
