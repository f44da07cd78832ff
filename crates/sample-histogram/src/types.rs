//! Core types for histogram representation

use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Accumulated mass: a count, or the summed weights of a weighted sample
    pub count: f64,
    /// Density (count / (total * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: f64, total: f64) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total > 0.0 {
            count / (total * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin's half-open interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A histogram over uniform-width bins
///
/// `values()` reports densities when the histogram was built density-normalised
/// and raw counts otherwise; both are always available per bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Total mass that landed inside the binned range
    total: f64,
    /// Whether `values()` reports densities
    density: bool,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total: f64, density: bool) -> Self {
        Self {
            bins,
            total,
            density,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total mass inside the binned range
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Whether `values()` reports densities
    pub fn is_density(&self) -> bool {
        self.density
    }

    /// Common width of every bin
    pub fn width(&self) -> f64 {
        self.bins.first().map_or(0.0, HistogramBin::width)
    }

    /// Lower and upper edge of the binned range
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.left, self.bins.last()?.right))
    }

    /// Bin centers
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Per-bin accumulated mass
    pub fn counts(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Per-bin densities
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Densities for a density histogram, counts otherwise
    pub fn values(&self) -> Vec<f64> {
        if self.density {
            self.densities()
        } else {
            self.counts()
        }
    }

    /// Split into `(centers, values)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.centers(), self.values())
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> f64 {
        self.bins.iter().map(|bin| bin.count).fold(0.0, f64::max)
    }

    /// Index of the bin with the largest mass (first one on ties)
    pub fn mode_bin(&self) -> Option<usize> {
        let max = self.max_count();
        self.bins.iter().position(|bin| bin.count == max)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Handle last bin specially (includes right boundary)
        let last = self.bins.last()?;
        if value == last.right {
            return Some(self.bins.len() - 1);
        }
        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }

    /// Integral of the density over the binned range
    pub fn integral(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density * bin.width()).sum()
    }

    /// Create a copy whose `values()` report densities integrating to 1
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        normalized.density = true;

        let integral = self.integral();
        if integral > 0.0 {
            for bin in &mut normalized.bins {
                bin.density /= integral;
            }
        }

        normalized
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.range().unwrap_or((0.0, 0.0));
        write!(
            f,
            "Histogram({} bins, total={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total,
            lo,
            hi
        )
    }
}
