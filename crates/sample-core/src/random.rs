//! Random sources for resampling
//!
//! Resampling code only needs two capabilities from a generator: a uniform
//! index in `[0, n)` and a uniform double in `[0, 1)`. [`RandomSource`]
//! captures exactly that and is implemented for every [`rand::Rng`], so a
//! seeded `StdRng` gives reproducible draws while `thread_rng()` serves as the
//! process default.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability interface for uniform random draws
pub trait RandomSource {
    /// Uniform integer in `[0, n)`
    ///
    /// `n` must be positive.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform double in `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "cannot draw an index from an empty range");
        self.gen_range(0..n)
    }

    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Create a deterministic generator for the given seed
///
/// # Examples
///
/// ```rust
/// use sample_core::random::{seeded, RandomSource};
///
/// let mut a = seeded(7);
/// let mut b = seeded(7);
/// assert_eq!(a.next_index(100), b.next_index(100));
/// ```
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create the process-default generator
///
/// Used when the caller does not supply a source. Draws are not reproducible.
pub fn default_source() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}
