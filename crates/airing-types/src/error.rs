//! Error types for wire-response parsing in airing-types.

use thiserror::Error;

/// Reasons a sensor response was rejected.
///
/// This error type is transport-agnostic and does not include
/// network errors (those belong in airing-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The response does not start with the `temp` token.
    #[error("response does not start with 'temp'")]
    MissingToken,

    /// The response ended before the named field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A field could not be read as a finite decimal number.
    #[error("invalid {field} value '{value}'")]
    InvalidNumber {
        /// Which field was rejected.
        field: &'static str,
        /// The offending text.
        value: String,
    },
}

/// Result type alias using airing-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
