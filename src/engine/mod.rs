// ============================================================================
// Engine Module
// Integer, fractional and whole-amount numeral rendering
// ============================================================================

mod converter;
mod fraction;
mod integer;

pub mod factory;

pub use converter::{convert, convert_amount, Converter};
pub use factory::{create_from_config, ConverterBuilder};
pub use fraction::{render_fraction, render_fraction_with};
pub use integer::{render_integer, render_integer_with, DigitEmission, ZeroRun};
