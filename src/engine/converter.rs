// ============================================================================
// Converter
// Joins the integer rendering, currency unit and fractional rendering
// ============================================================================

use super::fraction::write_fraction;
use super::integer::write_integer;
use crate::domain::{ConverterConfig, NumeralTables};
use crate::numeric::{Amount, ConversionResult};

/// Formal numeral converter.
///
/// Holds only immutable configuration, so one instance can be shared freely
/// between threads. Every call works on its own input and output buffer.
///
/// # Example
/// ```
/// use rmb_formal::prelude::*;
///
/// let converter = Converter::new(ConverterConfig::bank_check());
/// assert_eq!(converter.convert("1005").unwrap(), "人民币壹仟零伍圆整");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
    tables: NumeralTables,
}

impl Converter {
    /// Create a converter without validating `config`.
    ///
    /// Only pass configurations that are built in code or already checked.
    /// Anything read from outside (including a deserialized
    /// [`ConverterConfig`]) must go through
    /// [`create_from_config`](crate::engine::create_from_config) or
    /// [`ConverterBuilder`](crate::engine::ConverterBuilder), which reject
    /// prefixes that would make the rendered amount ambiguous.
    pub fn new(config: ConverterConfig) -> Self {
        let tables = config.tables();
        Self { config, tables }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn tables(&self) -> &NumeralTables {
        &self.tables
    }

    /// Parse `input` and render it.
    ///
    /// # Errors
    /// - `InvalidFormat` if `input` is not `1-12 digits[.0-2 digits]`
    /// - `AmountTooLarge` if the integer part is 10^12 or more
    pub fn convert(&self, input: &str) -> ConversionResult<String> {
        let amount = input.parse::<Amount>().map_err(|err| {
            tracing::debug!(input, %err, "Rejected amount");
            err
        })?;
        Ok(self.convert_amount(amount))
    }

    /// Render an already validated amount. Never fails.
    pub fn convert_amount(&self, amount: Amount) -> String {
        let mut out = String::with_capacity(96);
        if let Some(prefix) = &self.config.prefix {
            out.push_str(prefix);
        }
        write_amount(amount, &self.tables, &mut out);

        tracing::trace!(%amount, output = %out, "Converted amount");
        out
    }

    /// Convert a `rust_decimal::Decimal`, see [`Amount::from_decimal`].
    pub fn convert_decimal(&self, value: rust_decimal::Decimal) -> ConversionResult<String> {
        let amount = Amount::from_decimal(value).map_err(|err| {
            tracing::debug!(%value, %err, "Rejected decimal amount");
            err
        })?;
        Ok(self.convert_amount(amount))
    }
}

fn write_amount(amount: Amount, tables: &NumeralTables, out: &mut String) {
    write_integer(amount.yuan(), tables, out);
    out.push_str(tables.currency_unit);
    write_fraction(amount.jiao(), amount.fen(), tables, out);
}

/// Convert a decimal string into formal numerals with the standard style.
///
/// # Errors
/// - `InvalidFormat` if `input` is not `1-12 digits[.0-2 digits]`
/// - `AmountTooLarge` if the integer part is 10^12 or more
///
/// # Example
/// ```
/// use rmb_formal::convert;
///
/// assert_eq!(convert("1005").unwrap(), "壹仟零伍元整");
/// assert_eq!(convert("0.05").unwrap(), "零元伍分");
/// assert!(convert("abc").is_err());
/// ```
pub fn convert(input: &str) -> ConversionResult<String> {
    let amount = input.parse::<Amount>().map_err(|err| {
        tracing::debug!(input, %err, "Rejected amount");
        err
    })?;
    Ok(convert_amount(amount))
}

/// Render an amount with the standard style.
pub fn convert_amount(amount: Amount) -> String {
    let mut out = String::with_capacity(96);
    write_amount(amount, &NumeralTables::FORMAL, &mut out);
    out
}
