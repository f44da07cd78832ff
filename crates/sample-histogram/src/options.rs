//! Histogram configuration

use crate::builders::FixedWidthBuilder;
use serde::{Deserialize, Serialize};

/// Options for [`histogram`](crate::histogram)
///
/// Defaults: 10 bins, range derived from the sample, unit weights, counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOptions {
    /// Number of equal-width bins
    pub bins: usize,
    /// Explicit `(lo, hi)` range; derived from the sample when `None`
    pub range: Option<(f64, f64)>,
    /// Per-observation weights, same length as the sample
    pub weights: Option<Vec<f64>>,
    /// Report densities integrating to 1 instead of counts
    pub density: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            range: None,
            weights: None,
            density: false,
        }
    }
}

impl HistogramOptions {
    /// Set the number of bins
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set an explicit range
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some((lo, hi));
        self
    }

    /// Attach per-observation weights
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Toggle density normalisation
    pub fn with_density(mut self, density: bool) -> Self {
        self.density = density;
        self
    }

    /// Builder carrying the bin count, range and density flag
    pub fn builder(&self) -> FixedWidthBuilder {
        let builder = FixedWidthBuilder::new(self.bins).with_density(self.density);
        match self.range {
            Some((lo, hi)) => builder.with_range(lo, hi),
            None => builder,
        }
    }
}
