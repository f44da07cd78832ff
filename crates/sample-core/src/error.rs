//! Error types for sample statistics
//!
//! Provides a unified error type for all sample-stats crates.

use thiserror::Error;

/// Core error type for sample statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Zero spread collapsed a scale-dependent computation
    #[error("Degenerate sample: {0}")]
    Degenerate(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_quantile(p));
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::empty_input());
        }
        Ok(())
    }

    /// Check that a sample holds at least `min_size` values
    pub fn check_len<T>(data: &[T], min_size: usize) -> Result<()> {
        if data.len() < min_size {
            return Err(Error::InsufficientData {
                expected: min_size,
                actual: data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bins must be positive");

        let err = Error::InvalidInput("weights contain NaN".to_string());
        assert_eq!(err.to_string(), "Invalid input: weights contain NaN");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Degenerate("zero spread".to_string());
        assert_eq!(err.to_string(), "Degenerate sample: zero spread");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::size_mismatch(6, 5, "histogram weights");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in histogram weights: expected 6, got 5"
        );

        let err = Error::non_finite("sample");
        assert_eq!(err.to_string(), "Invalid input: sample contains NaN or infinite values");
    }

    #[test]
    fn test_checks() {
        assert!(Error::check_probability(0.0).is_ok());
        assert!(Error::check_probability(1.0).is_ok());
        assert!(Error::check_probability(1.1).is_err());
        assert!(Error::check_probability(-0.1).is_err());
        assert!(Error::check_probability(f64::NAN).is_err());

        assert!(Error::check_non_empty::<f64>(&[]).is_err());
        assert!(Error::check_non_empty(&[1.0]).is_ok());

        assert!(matches!(
            Error::check_len(&[1.0], 2),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(Error::check_len(&[1.0, 2.0], 2).is_ok());
    }
}
