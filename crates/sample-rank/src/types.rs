//! Core types for rank computation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for assigning a shared rank to a run of equal elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiesStrategy {
    /// Mean of the run's position-ranks (fractional ranks)
    Average,
    /// Smallest position-rank in the run
    Min,
    /// Largest position-rank in the run
    Max,
}

impl Default for TiesStrategy {
    fn default() -> Self {
        Self::Average
    }
}

impl TiesStrategy {
    /// Rank shared by a run occupying 1-based positions `first..=last`
    pub fn resolve(self, first: usize, last: usize) -> f64 {
        match self {
            Self::Average => (first + last) as f64 / 2.0,
            Self::Min => first as f64,
            Self::Max => last as f64,
        }
    }
}

/// Ranks of a sample together with its tie-correction factor
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// `1 - Σ(t³ - t) / (n³ - n)` over all tie-run lengths `t`
    pub correction: f64,
    /// 1-based ranks, index-aligned with the input
    pub ranks: Vec<f64>,
}

impl RankResult {
    /// Number of ranked elements
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if no elements were ranked
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Whether any two elements shared a rank
    pub fn has_ties(&self) -> bool {
        self.correction < 1.0
    }

    /// Split into `(correction, ranks)`
    pub fn into_parts(self) -> (f64, Vec<f64>) {
        (self.correction, self.ranks)
    }
}

impl fmt::Display for RankResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ranks={:?}, correction={:.6}", self.ranks, self.correction)
    }
}
