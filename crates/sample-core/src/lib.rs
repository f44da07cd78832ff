//! Core types shared by the sample statistics crates
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`RandomSource`]: the capability interface for uniform draws
//! - [`utils`]: small slice reductions (sorting, min/max, mean, standard deviation)
//!
//! # Example
//!
//! ```rust
//! use sample_core::{random::seeded, utils, RandomSource};
//!
//! let data = vec![4.0, 1.0, 3.0];
//! assert_eq!(utils::sorted(&data), vec![1.0, 3.0, 4.0]);
//!
//! let mut rng = seeded(42);
//! let idx = rng.next_index(data.len());
//! assert!(idx < data.len());
//! ```

pub mod error;
pub mod random;
pub mod utils;

pub use error::{Error, Result};
pub use random::{default_source, seeded, RandomSource};
