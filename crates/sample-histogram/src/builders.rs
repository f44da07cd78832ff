//! Uniform-width histogram construction

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use sample_core::{utils, Error, Result};
use tracing::{debug, instrument, warn};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins over either
/// an explicit range or one derived from the sample. Bins are half-open
/// `[left, right)` except the last, which also includes its right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
    density: bool,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            range: None,
            density: false,
        }
    }

    /// Bin over `[lo, hi]` instead of the derived range
    ///
    /// Observations outside the range are ignored.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some((lo, hi));
        self
    }

    /// Report densities (mass / (total * width)) instead of counts
    pub fn with_density(mut self, density: bool) -> Self {
        self.density = density;
        self
    }

    /// Range used for `sample`: the explicit one, or the padded sample range
    ///
    /// The span `hi - lo` must itself be finite so the bin width is.
    pub fn resolve_range(&self, sample: &[f64]) -> Result<(f64, f64)> {
        let (lo, hi) = match self.range {
            Some(range) => range,
            None => default_range(sample, self.num_bins).ok_or_else(Error::empty_input)?,
        };
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{lo}, {hi}] must be finite with lo < hi"
            )));
        }
        if !(hi - lo).is_finite() {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{lo}, {hi}] is too wide to split into bins"
            )));
        }
        Ok((lo, hi))
    }

    #[instrument(skip(self, sample, weights), fields(n = sample.len(), bins = self.num_bins, weighted = weights.is_some()))]
    fn accumulate(&self, sample: &[f64], weights: Option<&[f64]>) -> Result<Histogram> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be positive".to_string(),
            ));
        }
        Error::check_non_empty(sample)?;
        if !utils::all_finite(sample) {
            return Err(Error::non_finite("sample"));
        }
        if let Some(weights) = weights {
            if weights.len() != sample.len() {
                return Err(Error::size_mismatch(
                    sample.len(),
                    weights.len(),
                    "histogram weights",
                ));
            }
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(Error::InvalidInput(
                    "histogram weights must be finite and non-negative".to_string(),
                ));
            }
        }

        let (lo, hi) = self.resolve_range(sample)?;
        let edges = uniform_edges(lo, hi, self.num_bins);
        if edges.windows(2).any(|edge| edge[1] <= edge[0]) {
            return Err(Error::Degenerate(format!(
                "{} bins over [{lo}, {hi}] collapse below floating-point resolution",
                self.num_bins
            )));
        }
        debug!(lo, hi, width = (hi - lo) / self.num_bins as f64, "binning sample");

        let mut mass = vec![0.0; self.num_bins];
        let mut outside = 0usize;
        for (i, &value) in sample.iter().enumerate() {
            match locate(&edges, value) {
                Some(bin) => mass[bin] += weights.map_or(1.0, |w| w[i]),
                None => outside += 1,
            }
        }
        if outside > 0 {
            debug!(outside, "observations outside the histogram range were ignored");
        }

        let total: f64 = mass.iter().sum();
        if self.density && total <= 0.0 {
            warn!("histogram holds no mass, densities are reported as zero");
        }

        let bins = edges
            .windows(2)
            .zip(mass)
            .map(|(edge, m)| HistogramBin::new(edge[0], edge[1], m, total))
            .collect();

        Ok(Histogram::new(bins, total, self.density))
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        self.accumulate(sample, None)
    }

    fn build_weighted(&self, sample: &[f64], weights: &[f64]) -> Result<Histogram> {
        self.accumulate(sample, Some(weights))
    }
}

/// Padded sample range `(min - k, max + k)` with `k = (max - min) / (bins - 1) / 2`
///
/// The padding centres the outermost bins on the extreme observations, so
/// they never sit on a bin boundary. A constant sample is padded by
/// `0.5 · max(|x|, 1)` on each side, so the padding survives rounding at
/// any magnitude; a single bin spans exactly `[min, max]`.
///
/// Returns `None` for an empty sample.
pub fn default_range(sample: &[f64], bins: usize) -> Option<(f64, f64)> {
    let (min, max) = utils::min_max(sample)?;
    let k = if max == min {
        0.5 * min.abs().max(1.0)
    } else if bins <= 1 {
        0.0
    } else {
        (max - min) / (bins - 1) as f64 / 2.0
    };
    Some((min - k, max + k))
}

/// `bins + 1` evenly spaced edges, the last pinned to `hi`
fn uniform_edges(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let width = (hi - lo) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { hi } else { lo + i as f64 * width })
        .collect()
}

/// Bin index of `value`, or `None` when it falls outside the edges
fn locate(edges: &[f64], value: f64) -> Option<usize> {
    let bins = edges.len() - 1;
    if value < edges[0] || value > edges[bins] {
        return None;
    }
    // first edge strictly greater than value, minus one; the closed last bin
    // absorbs value == hi
    let idx = edges.partition_point(|&edge| edge <= value).checked_sub(1)?;
    Some(idx.min(bins - 1))
}
