//! Kernel density estimator

use crate::bandwidth::Bandwidth;
use crate::kernel::Kernel;
use sample_core::{utils, Error, Result};

/// Kernel density estimator over a borrowed sample
///
/// ```text
/// f(x) = 1 / (n h) · Σ K((x - x_i) / h)
/// ```
#[derive(Debug, Clone)]
pub struct Kde<'a, K: Kernel> {
    sample: &'a [f64],
    kernel: K,
    bandwidth: f64,
}

impl<'a, K: Kernel> Kde<'a, K> {
    /// Create an estimator, resolving `bandwidth` against `sample`
    ///
    /// # Errors
    /// - empty or non-finite sample
    /// - any error of [`Bandwidth::resolve`]
    pub fn new(sample: &'a [f64], kernel: K, bandwidth: impl Into<Bandwidth>) -> Result<Self> {
        Error::check_non_empty(sample)?;
        if !utils::all_finite(sample) {
            return Err(Error::non_finite("sample"));
        }
        let bandwidth = bandwidth.into().resolve(sample)?;
        Ok(Self {
            sample,
            kernel,
            bandwidth,
        })
    }

    /// The resolved smoothing bandwidth
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// The kernel in use
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Estimated density at `x`
    ///
    /// Observations farther than `support · h` from `x` are skipped for
    /// kernels with bounded support.
    pub fn estimate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let reach = self.kernel.support().map(|support| support * h);
        let sum: f64 = self
            .sample
            .iter()
            .map(|&xi| x - xi)
            .filter(|d| reach.map_or(true, |reach| d.abs() <= reach))
            .map(|d| self.kernel.evaluate(d, h))
            .sum();
        sum / self.sample.len() as f64
    }

    /// Estimated density at every point of `xs`
    #[cfg(not(feature = "parallel"))]
    pub fn map(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.estimate(x)).collect()
    }

    /// Estimated density at every point of `xs`
    #[cfg(feature = "parallel")]
    pub fn map(&self, xs: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;
        xs.par_iter().map(|&x| self.estimate(x)).collect()
    }
}

/// `points` evenly spaced values from `start` to `end`, both included
///
/// The last value is pinned to `end`. Fewer than two points yields
/// `[start]` or nothing.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandwidth::BandwidthRule;
    use crate::kernel::{Epanechnikov, Gaussian, KernelKind};
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
        let grid = linspace(-1.3, 7.1, 512);
        assert_eq!(grid.len(), 512);
        assert_eq!(grid[0], -1.3);
        assert_eq!(grid[511], 7.1);
    }

    #[test]
    fn test_single_point_gaussian() {
        let sample = [0.0];
        let kde = Kde::new(&sample, Gaussian, Bandwidth::Fixed(1.0)).unwrap();
        assert_eq!(kde.bandwidth(), 1.0);
        assert_relative_eq!(kde.estimate(0.0), Gaussian.weight(0.0), epsilon = 1e-15);
        assert_relative_eq!(kde.estimate(1.0), kde.estimate(-1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_bandwidth_scales_density() {
        let sample = [0.0, 1.0];
        let kde = Kde::new(&sample, Epanechnikov, Bandwidth::Fixed(2.0)).unwrap();
        // (0.75 + 0.75 * (1 - 0.25)) / (2 * 2)
        assert_relative_eq!(kde.estimate(0.0), (0.75 + 0.5625) / 4.0, epsilon = 1e-15);
        assert_eq!(kde.estimate(10.0), 0.0);
    }

    #[test]
    fn test_bounded_support_matches_full_sum() {
        let sample = [-3.0, -0.4, 0.0, 0.25, 0.9, 5.0];
        let h = 0.8;
        let kde = Kde::new(&sample, Epanechnikov, Bandwidth::Fixed(h)).unwrap();
        for x in linspace(-4.0, 6.0, 41) {
            let full: f64 = sample
                .iter()
                .map(|&xi| Epanechnikov.weight((x - xi) / h))
                .sum::<f64>()
                / (sample.len() as f64 * h);
            assert_relative_eq!(kde.estimate(x), full, epsilon = 1e-12);
        }
        // nothing within reach of x = 2.5
        assert_eq!(kde.estimate(2.5), 0.0);
    }

    #[test]
    fn test_rule_bandwidth_matches_selector() {
        let sample = [1.0, 2.0, 4.0, 8.0, 16.0];
        let kde = Kde::new(&sample, KernelKind::Gaussian, BandwidthRule::Scott).unwrap();
        assert_eq!(kde.bandwidth(), BandwidthRule::Scott.select(&sample).unwrap());
    }

    #[test]
    fn test_map_matches_estimate() {
        let sample = [0.3, -1.2, 2.2, 0.9];
        let kde = Kde::new(&sample, Gaussian, BandwidthRule::Silverman).unwrap();
        let xs = linspace(-3.0, 3.0, 13);
        let mapped = kde.map(&xs);
        for (x, y) in xs.iter().zip(mapped) {
            assert_eq!(y, kde.estimate(*x));
        }
    }

    #[test]
    fn test_invalid_sample() {
        assert!(matches!(
            Kde::new(&[], Gaussian, Bandwidth::Fixed(1.0)),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            Kde::new(&[1.0, f64::NAN], Gaussian, Bandwidth::Fixed(1.0)),
            Err(Error::InvalidInput(_))
        ));
    }
}
