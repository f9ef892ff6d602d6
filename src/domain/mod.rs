// ============================================================================
// Domain Models Module
// Static numeral data, digit grouping and output configuration
// ============================================================================

pub mod config;
pub mod digit_group;
pub mod tables;

pub use config::{ConverterConfig, CurrencyUnit, ExactMarker};
pub use digit_group::{split_groups, DigitGroup, DigitGroups, GROUP_BASE, GROUP_WIDTH};
pub use tables::NumeralTables;
