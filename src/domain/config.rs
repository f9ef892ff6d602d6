// ============================================================================
// Converter Configuration
// Output style options for formal numeral rendering
// ============================================================================

use super::tables::NumeralTables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Currency Unit
// ============================================================================

/// Numeral written between the integer part and the jiao/fen part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyUnit {
    /// 元 - current everyday form
    #[default]
    Yuan,
    /// 圆 - formal form printed on banknotes and older bank instruments
    YuanFormal,
}

impl CurrencyUnit {
    pub const fn numeral(&self) -> &'static str {
        match self {
            CurrencyUnit::Yuan => "元",
            CurrencyUnit::YuanFormal => "圆",
        }
    }
}

// ============================================================================
// Exact Marker
// ============================================================================

/// Numeral closing an amount with no jiao and no fen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExactMarker {
    /// 整
    #[default]
    Zheng,
    /// 正 - accepted alternative on bills
    ZhengAlt,
}

impl ExactMarker {
    pub const fn numeral(&self) -> &'static str {
        match self {
            ExactMarker::Zheng => "整",
            ExactMarker::ZhengAlt => "正",
        }
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`Converter`](crate::engine::Converter)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Unit written after the integer part
    pub currency_unit: CurrencyUnit,

    /// Marker written when there is no fractional part
    pub exact_marker: ExactMarker,

    /// Optional: text placed in front of the numerals (e.g. "人民币")
    /// None means the output starts directly with the first numeral
    pub prefix: Option<String>,
}

impl ConverterConfig {
    /// Create a new configuration with explicit units and no prefix
    pub fn new(currency_unit: CurrencyUnit, exact_marker: ExactMarker) -> Self {
        Self {
            currency_unit,
            exact_marker,
            prefix: None,
        }
    }

    /// Builder method: Set the currency unit
    pub fn with_currency_unit(mut self, unit: CurrencyUnit) -> Self {
        self.currency_unit = unit;
        self
    }

    /// Builder method: Set the exact marker
    pub fn with_exact_marker(mut self, marker: ExactMarker) -> Self {
        self.exact_marker = marker;
        self
    }

    /// Builder method: Set the prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Numeral tables for the configured units
    pub fn tables(&self) -> NumeralTables {
        NumeralTables {
            currency_unit: self.currency_unit.numeral(),
            exact_marker: self.exact_marker.numeral(),
            ..NumeralTables::FORMAL
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("Prefix cannot be empty".to_string());
            }
            // Digits next to the numerals would make the amount ambiguous
            if prefix.chars().any(|c| c.is_ascii_digit()) {
                return Err("Prefix cannot contain digits".to_string());
            }
            if let Some(numeral) = prefix.chars().find(|&c| is_amount_numeral(c)) {
                return Err(format!("Prefix cannot contain the numeral {}", numeral));
            }
        }

        Ok(())
    }
}

/// True if `c` can appear in the integer part of a rendering.
fn is_amount_numeral(c: char) -> bool {
    let tables = NumeralTables::FORMAL;
    tables
        .digits
        .iter()
        .chain(tables.positions.iter())
        .chain(tables.scales.iter())
        .any(|numeral| numeral.contains(c))
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Everyday style: 壹仟零伍元整
    pub fn standard() -> Self {
        Self::default()
    }

    /// Cheque style: 人民币壹仟零伍圆整
    pub fn bank_check() -> Self {
        Self::new(CurrencyUnit::YuanFormal, ExactMarker::Zheng).with_prefix("人民币")
    }
}
