//! Seedable resampling engine
//!
//! [`Resampler`] bundles the free functions with a generator policy: a fixed
//! seed for reproducible draws, or a fresh seed from the thread-local
//! generator. A new generator is created for every call and dropped when the
//! call returns.

use crate::sampling::{sample, SampleOptions};
use crate::shuffle::shuffle;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use sample_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Resampling engine with an optional fixed seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resampler {
    seed: Option<u64>,
}

impl Resampler {
    /// Create a resampler drawing from a fresh seed on every call
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The fixed seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        StdRng::seed_from_u64(seed)
    }

    /// Shuffle `data` in place
    pub fn shuffle<T>(&self, data: &mut [T]) {
        shuffle(data, &mut self.rng());
    }

    /// Draw from `population` according to `options`
    pub fn sample<T: Clone>(&self, population: &[T], options: &SampleOptions) -> Result<Vec<T>> {
        sample(population, &mut self.rng(), options)
    }

    /// Draw `n_resamples` bootstrap resamples of the same size as `data`
    ///
    /// All resamples share one generator, so a seeded resampler yields the
    /// same sequence of resamples on every call.
    #[instrument(skip(self, data), fields(n = data.len(), seeded = self.seed.is_some()))]
    pub fn bootstrap<T: Clone>(&self, data: &[T], n_resamples: usize) -> Result<Vec<Vec<T>>> {
        if n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "number of resamples must be positive".to_string(),
            ));
        }
        Error::check_non_empty(data)?;

        debug!("Generating {} bootstrap resamples", n_resamples);
        let mut rng = self.rng();
        let options = SampleOptions::default().with_replacement();
        (0..n_resamples)
            .map(|_| sample(data, &mut rng, &options))
            .collect()
    }
}
