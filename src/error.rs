/**
Error types for the demo drivers and CLI operations

The transform itself never fails; these cover the surfaces around it:
looking up demos, writing their output, and parsing CLI input for the
fallible map operations.
*/

use thiserror::Error;

/// Errors raised while running demos or map operations
#[derive(Debug, Error)]
pub enum DemoError {
    /// No demo registered under this name
    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    /// Input element could not be read as an integer
    #[error("Not an integer: '{value}' at position {index}")]
    InvalidNumber { value: String, index: usize },

    /// Operation result does not fit in an i64
    #[error("Integer overflow: '{value}' at position {index}")]
    Overflow { value: String, index: usize },

    /// Writing demo output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for demo operations
pub type DemoResult<T> = Result<T, DemoError>;
