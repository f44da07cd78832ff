//! Rank computation with tie resolution
//!
//! Assigns 1-based ranks to the elements of a sample, resolving runs of equal
//! elements with a [`TiesStrategy`], and reports the tie-correction factor
//! used by rank-based tests.
//!
//! # Example
//!
//! ```rust
//! use sample_rank::{rank, TiesStrategy};
//!
//! let result = rank(&[10.0, 20.0, 20.0, 30.0], TiesStrategy::Min);
//! assert_eq!(result.ranks, vec![1.0, 2.0, 2.0, 4.0]);
//! ```

pub mod ranking;
pub mod types;

pub use ranking::{rank, rank_by, tie_correction};
pub use types::{RankResult, TiesStrategy};
