//! Error types for the quality-control statistics engine
//!
//! Statistical computations in this workspace are total and never fail on
//! degenerate numeric input. Errors only surface at the boundaries: strict
//! configuration validation and parsing of persisted configuration.

use thiserror::Error;

/// Core error type shared by all qc-stats crates
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be accepted
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or snapshot (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a non-positive bin count
    pub fn invalid_bin_count(bins: usize) -> Self {
        Self::InvalidParameter(format!("Bin count {bins} must be at least 1"))
    }

    /// Create an error for a specification limit pair in the wrong order
    pub fn inverted_limits(lsl: f64, usl: f64) -> Self {
        Self::InvalidParameter(format!(
            "Upper specification limit {usl} must be greater than lower limit {lsl}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
