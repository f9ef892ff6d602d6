// ============================================================================
// Converter Factory
// Creates converters with validated configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, CurrencyUnit, ExactMarker};
use crate::engine::Converter;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
///
/// # Returns
/// * `Result<Converter, String>` - Configured converter or error
///
/// # Example
/// ```
/// use rmb_formal::prelude::*;
///
/// let converter = create_from_config(ConverterConfig::bank_check()).unwrap();
/// assert_eq!(converter.convert("0.05").unwrap(), "人民币零圆伍分");
/// ```
pub fn create_from_config(config: ConverterConfig) -> Result<Converter, String> {
    config.validate()?;
    Ok(Converter::new(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use rmb_formal::prelude::*;
///
/// let converter = ConverterBuilder::new()
///     .formal_currency_unit()
///     .with_prefix("人民币")
///     .build()
///     .unwrap();
/// assert_eq!(converter.convert("1000").unwrap(), "人民币壹仟圆整");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Start from the standard style
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Write 圆 after the integer part
    pub fn formal_currency_unit(mut self) -> Self {
        self.config.currency_unit = CurrencyUnit::YuanFormal;
        self
    }

    /// Write 元 after the integer part
    pub fn everyday_currency_unit(mut self) -> Self {
        self.config.currency_unit = CurrencyUnit::Yuan;
        self
    }

    /// Choose the marker written for whole amounts
    pub fn with_exact_marker(mut self, marker: ExactMarker) -> Self {
        self.config.exact_marker = marker;
        self
    }

    /// Text placed in front of the numerals
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<Converter, String> {
        create_from_config(self.config)
    }
}
