//! Error types for serial-number decoding.

use thiserror::Error;

/// Why a serial number could not be decoded to a date.
///
/// These never escape the pipeline; they are logged and the row is left
/// without the derived field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Serial is not the expected length.
    #[error("serial has {actual} characters, expected {expected}")]
    Length { expected: usize, actual: usize },

    /// A date component was not numeric.
    #[error("serial {component} '{value}' is not numeric")]
    NonNumeric {
        component: &'static str,
        value: String,
    },

    /// Week of year outside 1..=53.
    #[error("serial week {0} is out of range")]
    WeekOutOfRange(u32),

    /// Components decoded but do not form a calendar date.
    #[error("serial does not map to a calendar date")]
    InvalidDate,
}

/// Result type for serial decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
