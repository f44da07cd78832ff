//! Shared helpers for quantile integration tests
//!
//! The reference estimator below follows the
//! textbook Hyndman–Fan formulation (`j = floor(np + m)`) rather than the
//! clamped-position form used by the crate. It exists only to cross-check.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Naive Hyndman–Fan sample quantile of the given type (4..=9)
pub fn naive_quantile(data: &[f64], hf_type: u8, p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty data");
    assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();

    let (alpha, beta) = match hf_type {
        4 => (0.0, 1.0),
        5 => (0.5, 0.5),
        6 => (0.0, 0.0),
        7 => (1.0, 1.0),
        8 => (1.0 / 3.0, 1.0 / 3.0),
        9 => (3.0 / 8.0, 3.0 / 8.0),
        _ => panic!("unsupported type {hf_type}"),
    };

    let m = alpha + p * (1.0 - alpha - beta);
    let pos = n as f64 * p + m;
    let j = pos.floor();
    let g = pos - j;

    // x_k with x_0 = x_1 and x_{n+1} = x_n
    let x = |k: i64| -> f64 {
        let k = k.clamp(1, n as i64) as usize;
        sorted[k - 1]
    };

    if g == 0.0 {
        return x(j as i64);
    }
    (1.0 - g) * x(j as i64) + g * x(j as i64 + 1)
}

/// Generate normal distribution data
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate uniform distribution data
pub fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// Test datasets with various characteristics
pub fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("tiny", vec![1.0, 2.0, 3.0]),
        ("small", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("uniform_10", (1..=10).map(|x| x as f64).collect()),
        ("uniform_100", (1..=100).map(|x| x as f64).collect()),
        ("random_normal", generate_normal(101, 0.0, 1.0, 42)),
        ("random_uniform", generate_uniform(100, 0.0, 10.0, 42)),
        ("single", vec![42.0]),
        ("pair", vec![-1.0, 1.0]),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
        ("with_outliers", {
            let mut data = generate_normal(100, 0.0, 1.0, 7);
            data[0] = -100.0;
            data[99] = 100.0;
            data
        }),
        ("large_values", (1000..1100).map(|x| x as f64).collect()),
        ("small_values", (0..100).map(|x| x as f64 * 0.001).collect()),
    ]
}
