//! Error types for chromatic color values and operations.

use thiserror::Error;

/// Errors produced while constructing or combining colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A numeric channel was outside its domain (or was NaN/infinite).
    #[error("{channel} channel value {value} out of range [{min}, {max}]")]
    ChannelOutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A hex color string was malformed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A division hit a zero divisor in the given channel.
    #[error("division by zero in {channel} channel")]
    DivisionByZero { channel: &'static str },

    /// A generator parameter was outside its domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: &'static str, reason: String },
}

impl ColorError {
    /// Returns true for construction-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ColorError::ChannelOutOfRange { .. } | ColorError::InvalidHex(_)
        )
    }
}
