//! Error types for clock conversions.

use thiserror::Error;

/// Result type for codec operations.
pub type ClockResult<T> = Result<T, ClockError>;

/// Errors raised while parsing, validating or decoding clock values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Malformed time text, wrong row length or a lamp outside the row's alphabet.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A structurally valid value that lies outside the legal range.
    #[error("{field} value {value} is out of range [0, {max}]")]
    OutOfRange {
        /// Which component overflowed (`hour`, `minute`, `second`).
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl ClockError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        ClockError::InvalidFormat(msg.into())
    }

    /// Stable machine-readable code, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ClockError::InvalidFormat(_) => "INVALID_FORMAT",
            ClockError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}
