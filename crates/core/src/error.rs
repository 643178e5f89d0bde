//! Error types for layerdesc
//!
//! Every operation on the wrapper itself is total. The only failures that
//! exist come from collaborators (an inner describer, a number generator)
//! or from loading configuration. We use `thiserror` for the `Display` and
//! `Error` implementations.

use thiserror::Error;

/// Result type alias for layerdesc operations
pub type Result<T> = std::result::Result<T, LayerError>;

/// Error types for the description bridge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// An inner layer failed to produce its description
    ///
    /// Wrappers pass this through untouched; the message is whatever the
    /// failing layer reported.
    #[error("Inner layer failed: {0}")]
    Inner(String),

    /// A number generator was asked for an empty range
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound (inclusive)
        min: i64,
        /// Requested upper bound (inclusive)
        max: i64,
    },

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LayerError {
    /// Convenience constructor for inner layer failures
    pub fn inner(message: impl Into<String>) -> Self {
        LayerError::Inner(message.into())
    }

    /// Convenience constructor for configuration failures
    pub fn config(message: impl Into<String>) -> Self {
        LayerError::Config(message.into())
    }
}
