//! Core traits for histogram building

use crate::types::Histogram;
use sample_core::Result;

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram where every observation has unit mass
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Build a histogram where observation `i` contributes `weights[i]`
    ///
    /// `weights` must be as long as `sample`.
    fn build_weighted(&self, sample: &[f64], weights: &[f64]) -> Result<Histogram>;
}
