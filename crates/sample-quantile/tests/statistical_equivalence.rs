//! Statistical equivalence tests comparing the estimators with a naive
//! reference implementation

mod common;

use approx::assert_relative_eq;
use common::{generate_normal, generate_test_datasets, naive_quantile};
use sample_quantile::{continuous_by, quantiles, ContinuousParam, QuantileEstimator};

const PROBABILITIES: [f64; 11] = [0.0, 0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99, 1.0];

#[test]
fn test_all_params_match_reference() {
    for (name, data) in generate_test_datasets() {
        let scale = data.iter().fold(1.0f64, |acc, x| acc.max(x.abs()));
        for param in ContinuousParam::ALL {
            for &p in &PROBABILITIES {
                let ours = continuous_by(&data, param, p).unwrap();
                let reference = naive_quantile(&data, param.hyndman_fan_type(), p);
                assert!(
                    (ours - reference).abs() <= 1e-10 * scale,
                    "{name}: {param} at p={p}: {ours} vs {reference}"
                );
            }
        }
    }
}

#[test]
fn test_batch_matches_reference() {
    let data = generate_normal(257, 10.0, 3.0, 11);
    for param in ContinuousParam::ALL {
        let batch = quantiles(&data, param, &PROBABILITIES).unwrap();
        for (q, &p) in batch.iter().zip(PROBABILITIES.iter()) {
            assert_relative_eq!(
                *q,
                naive_quantile(&data, param.hyndman_fan_type(), p),
                max_relative = 1e-10
            );
        }
    }
}

#[test]
fn test_estimators_converge_on_large_samples() {
    // every estimator targets the same population quantile
    let data = generate_normal(20_000, 0.0, 1.0, 5);
    let medians: Vec<f64> = ContinuousParam::ALL
        .iter()
        .map(|param| param.quantile(&data, 0.5).unwrap())
        .collect();
    for m in &medians {
        assert!(m.abs() < 0.05, "median {m} too far from 0");
    }
    // standard normal IQR is 2 * 0.6745
    let iqr = ContinuousParam::S.iqr(&data).unwrap();
    assert!((iqr - 1.349).abs() < 0.06, "iqr {iqr}");
}

#[test]
fn test_estimators_are_monotone_in_p() {
    let data = generate_normal(50, 0.0, 1.0, 3);
    let grid: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
    for param in ContinuousParam::ALL {
        let qs = quantiles(&data, param, &grid).unwrap();
        for w in qs.windows(2) {
            assert!(w[0] <= w[1], "{param} not monotone");
        }
    }
}
