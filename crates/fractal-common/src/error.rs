//! Error types for input parsing and validation.

use thiserror::Error;

/// Result type alias using ParseError.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while turning command-line text into render inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid format: '{input}'. Expected two values separated by '{separator}'")]
    InvalidFormat { input: String, separator: char },

    #[error("Invalid integer: '{0}'")]
    InvalidInteger(String),

    #[error("Invalid number: '{0}'")]
    InvalidFloat(String),

    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    DegenerateDimensions { width: usize, height: usize },

    #[error("Image dimensions {width}x{height} are too large (each side at most {max_side}, pixel count must fit in memory)")]
    DimensionsTooLarge {
        width: usize,
        height: usize,
        max_side: usize,
    },
}
