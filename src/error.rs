//! Error types for Carousel Greedy.

use thiserror::Error;

/// Errors raised by the engine, the adapters, and instance readers.
#[derive(Debug, Error)]
pub enum CgError {
    /// The candidate universe was exhausted while the solution was still
    /// infeasible. The instance has a requirement no candidate can satisfy.
    #[error("instance error: {0}")]
    Instance(String),

    /// Internal bookkeeping was driven outside its contract (an element
    /// outside the universe, or a residual count dropping below zero).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A run parameter or construction input was rejected before any
    /// phase executed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed instance file.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// I/O failure while reading an instance.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for Carousel Greedy operations.
pub type Result<T> = std::result::Result<T, CgError>;
