//! Smoothing kernels
//!
//! A kernel is a symmetric weight function `K(u)` integrating to one. The
//! estimator evaluates it at scaled distances `u = (x - x_i) / h`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Weight function of a kernel density estimator
pub trait Kernel: Send + Sync {
    /// Kernel weight `K(u)` at the scaled distance `u`
    fn weight(&self, u: f64) -> f64;

    /// Half-width of the support in units of `u`, `None` when unbounded
    fn support(&self) -> Option<f64> {
        None
    }

    /// Kernel name for debugging/logging
    fn name(&self) -> &'static str;

    /// Weight of an observation at distance `d` under bandwidth `h`, `K(d / h) / h`
    fn evaluate(&self, d: f64, h: f64) -> f64 {
        self.weight(d / h) / h
    }
}

/// Standard normal kernel, `K(u) = exp(-u² / 2) / √(2π)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gaussian;

impl Kernel for Gaussian {
    fn weight(&self, u: f64) -> f64 {
        (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}

/// Epanechnikov kernel, `K(u) = 3/4 (1 - u²)` on `[-1, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Epanechnikov;

impl Kernel for Epanechnikov {
    fn weight(&self, u: f64) -> f64 {
        if u.abs() <= 1.0 {
            0.75 * (1.0 - u * u)
        } else {
            0.0
        }
    }

    fn support(&self) -> Option<f64> {
        Some(1.0)
    }

    fn name(&self) -> &'static str {
        "epanechnikov"
    }
}

/// Configuration-friendly selector over the built-in kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    #[default]
    Gaussian,
    Epanechnikov,
}

impl Kernel for KernelKind {
    fn weight(&self, u: f64) -> f64 {
        match self {
            Self::Gaussian => Gaussian.weight(u),
            Self::Epanechnikov => Epanechnikov.weight(u),
        }
    }

    fn support(&self) -> Option<f64> {
        match self {
            Self::Gaussian => Gaussian.support(),
            Self::Epanechnikov => Epanechnikov.support(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Gaussian => Gaussian.name(),
            Self::Epanechnikov => Epanechnikov.name(),
        }
    }
}
