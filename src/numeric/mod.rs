// ============================================================================
// Numeric Module
// Exact amount representation and input validation
// ============================================================================
//
// This module provides:
// - Amount: yuan/jiao/fen decomposition of a monetary amount
// - ConversionError: Error types for parsing and conversion
// - validate/is_valid_amount: input checks for live feedback
//
// Design principles:
// - No floating-point operations
// - All parsing returns Result (no panics)
// - The 10^12 cap is enforced at construction

mod amount;
mod errors;

pub use amount::{
    is_valid_amount, validate, Amount, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS, YUAN_LIMIT,
};
pub use errors::{ConversionError, ConversionResult};
