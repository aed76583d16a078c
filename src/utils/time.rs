//! Duration parsing for the sidecar prompt

use thiserror::Error;

/// Why a duration answer could not be turned into milliseconds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Text is not a decimal number
    #[error("'{input}' is not a number of seconds")]
    NotANumber { input: String },

    /// Number is negative, NaN or infinite
    #[error("'{input}' is not a finite, non-negative number of seconds")]
    OutOfRange { input: String },
}

/// Convert a decimal number of seconds to whole milliseconds.
///
/// Rounds `1000 * seconds` to the nearest integer, ties to even.
pub fn seconds_to_millis(input: &str) -> Result<u64, ConversionError> {
    let trimmed = input.trim();
    let seconds: f64 = trimmed.parse().map_err(|_| ConversionError::NotANumber {
        input: trimmed.to_string(),
    })?;

    let millis = (seconds * 1000.0).round_ties_even();
    if !millis.is_finite() || seconds < 0.0 || millis >= u64::MAX as f64 {
        return Err(ConversionError::OutOfRange {
            input: trimmed.to_string(),
        });
    }

    Ok(millis as u64)
}
