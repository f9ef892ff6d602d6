// ============================================================================
// Conversion Errors
// Error types for amount parsing and numeral rendering
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or converting an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Input does not match `1-12 digits[.0-2 digits]`
    InvalidFormat,
    /// Integer part is 10^12 or more
    AmountTooLarge,
}

impl ConversionError {
    /// True for the out-of-range case, which callers usually report differently
    /// from a typing mistake.
    #[inline]
    pub const fn is_too_large(&self) -> bool {
        matches!(self, ConversionError::AmountTooLarge)
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidFormat => write!(
                f,
                "invalid amount format: expected 1-12 digits with at most 2 decimal places"
            ),
            ConversionError::AmountTooLarge => write!(
                f,
                "amount too large: maximum supported amount is 999999999999.99"
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
