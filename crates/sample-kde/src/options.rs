//! Density estimation configuration

use crate::bandwidth::Bandwidth;
use crate::kernel::KernelKind;
use sample_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options for [`estimate_pdf`](crate::estimate_pdf)
///
/// Defaults: Gaussian kernel, Silverman bandwidth, 512 grid points, grid
/// extended by 3 bandwidths past the sample extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdeOptions {
    /// Smoothing kernel
    pub kernel: KernelKind,
    /// Bandwidth rule or fixed bandwidth
    pub bandwidth: Bandwidth,
    /// Number of grid points, at least 2
    pub points: usize,
    /// Grid extension beyond the sample range, in bandwidths
    pub cushion: f64,
}

impl Default for KdeOptions {
    fn default() -> Self {
        Self {
            kernel: KernelKind::Gaussian,
            bandwidth: Bandwidth::default(),
            points: 512,
            cushion: 3.0,
        }
    }
}

impl KdeOptions {
    /// Set the kernel
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the bandwidth rule or a fixed bandwidth
    pub fn with_bandwidth(mut self, bandwidth: impl Into<Bandwidth>) -> Self {
        self.bandwidth = bandwidth.into();
        self
    }

    /// Set the number of grid points
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Set the grid extension in bandwidths
    pub fn with_cushion(mut self, cushion: f64) -> Self {
        self.cushion = cushion;
        self
    }

    /// Check the grid settings
    pub fn validate(&self) -> Result<()> {
        if self.points < 2 {
            return Err(Error::InvalidParameter(format!(
                "density grid needs at least 2 points, got {}",
                self.points
            )));
        }
        if !self.cushion.is_finite() || self.cushion < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "grid cushion must be finite and non-negative, got {}",
                self.cushion
            )));
        }
        Ok(())
    }
}
