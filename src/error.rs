//! Error types for quote stripping configuration

use thiserror::Error;

/// Rejected configuration at the API boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StripError {
    /// Keep-count is not a positive integer
    #[error("Invalid keep_quote_lines '{value}': must be a positive integer")]
    InvalidKeepLines { value: String },

    /// Length cap is not a non-negative integer
    #[error("Invalid max_length '{value}': must be a non-negative integer")]
    InvalidMaxLength { value: String },
}

/// Parse a keep-count, rejecting zero, negatives and non-numbers
pub fn parse_keep_lines(value: &str) -> Result<usize, StripError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StripError::InvalidKeepLines {
            value: value.to_string(),
        }),
    }
}

/// Parse a length cap; `0` means unlimited
pub fn parse_max_length(value: &str) -> Result<usize, StripError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| StripError::InvalidMaxLength {
            value: value.to_string(),
        })
}
