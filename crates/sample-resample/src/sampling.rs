//! Sampling with and without replacement

use crate::shuffle::shuffle;
use sample_core::{Error, RandomSource, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Options for [`sample`]
///
/// Defaults: without replacement, as many draws as the population holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    /// Draw independently with replacement
    pub replace: bool,
    /// Number of draws; the population length when `None`
    pub size: Option<usize>,
}

impl SampleOptions {
    /// Sample with replacement
    pub fn with_replacement(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Set the number of draws
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Draw from `population` according to `options`
///
/// Without replacement this shuffles a copy and keeps the first `size`
/// elements; with replacement it draws `size` independent uniform indices.
///
/// # Errors
/// - [`Error::InvalidParameter`] when sampling without replacement and
///   `size` exceeds the population
/// - [`Error::InsufficientData`] when sampling with replacement from an empty
///   population
///
/// # Examples
///
/// ```rust
/// use sample_core::seeded;
/// use sample_resample::{sample, SampleOptions};
///
/// let drawn = sample(&[1, 2, 3], &mut seeded(1), &SampleOptions::default().with_size(2)).unwrap();
/// assert_eq!(drawn.len(), 2);
/// ```
pub fn sample<T, R>(population: &[T], rng: &mut R, options: &SampleOptions) -> Result<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let n = population.len();
    let size = options.size.unwrap_or(n);
    trace!(n, size, replace = options.replace, "drawing sample");

    if options.replace {
        if size == 0 {
            return Ok(Vec::new());
        }
        Error::check_non_empty(population)?;
        return Ok((0..size)
            .map(|_| population[rng.next_index(n)].clone())
            .collect());
    }

    if size > n {
        return Err(Error::InvalidParameter(format!(
            "cannot draw {size} elements without replacement from a population of {n}"
        )));
    }
    let mut drawn = population.to_vec();
    shuffle(&mut drawn, rng);
    drawn.truncate(size);
    Ok(drawn)
}
