//! Resampling primitives
//!
//! Fisher–Yates shuffling and with/without-replacement sampling over any
//! [`RandomSource`](sample_core::RandomSource). Pass a seeded generator for
//! reproducible draws, or use [`Resampler`] to manage the generator.
//!
//! # Example
//!
//! ```rust
//! use sample_core::seeded;
//! use sample_resample::{sample, shuffled, Resampler, SampleOptions};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! let mut rng = seeded(42);
//!
//! let permuted = shuffled(&data, &mut rng);
//! assert_eq!(permuted.len(), 4);
//!
//! let bootstrap = sample(&data, &mut rng, &SampleOptions::default().with_replacement()).unwrap();
//! assert_eq!(bootstrap.len(), 4);
//!
//! let resamples = Resampler::new().with_seed(7).bootstrap(&data, 100).unwrap();
//! assert_eq!(resamples.len(), 100);
//! ```

pub mod resampler;
pub mod sampling;
pub mod shuffle;

pub use resampler::Resampler;
pub use sampling::{sample, SampleOptions};
pub use shuffle::{shuffle, shuffled, shuffled_indices};

pub use sample_core::{Error, Result};
