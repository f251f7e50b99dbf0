//! Error types for XBM extraction and colour parsing.

use thiserror::Error;

/// Fatal failures while extracting dimensions and pixel data from XBM text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `#define <name>_width` or `#define <name>_height` was not found
    #[error("failed to parse dimensions")]
    MissingDimensions,

    /// Dimensions were found but are zero or too large to address
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: String, height: String },

    /// No `<name>_bits[] = { ... };` declaration
    #[error("failed to parse bits array")]
    MissingBitsArray,

    /// The bits array exists but holds no numeric literals
    #[error("no numbers found in bits array")]
    EmptyBitsArray,

    /// A token matched the literal pattern but did not convert to an integer
    #[error("bad number {token:?}: {reason}")]
    BadNumber { token: String, reason: String },
}

/// Failures while parsing a `#RRGGBBAA` colour string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("want #RRGGBBAA, got {0:?}")]
    Length(String),

    #[error("invalid hex digit in colour {0:?}")]
    Digit(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
