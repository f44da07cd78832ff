//! Common test utilities for density estimation tests

use rand::prelude::*;
use rand_distr::{Distribution, Normal};

/// Draw `n` values from `N(mean, sd)` with a fixed seed
pub fn generate_normal(n: usize, mean: f64, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, sd).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Standard normal sample with distinct, well-spread values
pub fn standard_normal(n: usize) -> Vec<f64> {
    generate_normal(n, 0.0, 1.0, 42)
}
