// ============================================================================
// RMB Formal Numerals Library
// Exact conversion of monetary amounts into formal Chinese numerals
// ============================================================================

//! # RMB Formal
//!
//! Converts a non-negative amount of yuan with up to two decimal places into
//! the formal (大写) numerals written on cheques, invoices and contracts.
//!
//! ## Features
//!
//! - **Exact input handling**: amounts are split into yuan/jiao/fen without
//!   ever passing through a float
//! - **Four-digit grouping** with 万/亿 scale units and single-零 zero runs
//! - **Typed errors** for malformed and out-of-range input, never a panic
//! - **Configurable style** (元/圆, 整/正, optional 人民币 prefix)
//!
//! ## Example
//!
//! ```rust
//! use rmb_formal::prelude::*;
//!
//! assert_eq!(convert("1005").unwrap(), "壹仟零伍元整");
//! assert_eq!(convert("100000000.5").unwrap(), "壹亿元伍角");
//! assert_eq!(convert("1000000000000"), Err(ConversionError::AmountTooLarge));
//!
//! let amount: Amount = "0.05".parse().unwrap();
//! assert_eq!(convert_amount(amount), "零元伍分");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use engine::{convert, convert_amount};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, CurrencyUnit, ExactMarker, NumeralTables};
    pub use crate::engine::{
        convert, convert_amount, create_from_config, render_fraction, render_integer, Converter,
        ConverterBuilder,
    };
    pub use crate::numeric::{
        is_valid_amount, validate, Amount, ConversionError, ConversionResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    const NONZERO_DIGITS: &str = "壹贰叁肆伍陆柒捌玖";

    #[test]
    fn test_end_to_end_conversion() {
        // What an input field would do: validate while typing, convert on submit
        let typed = ["1", "10", "100", "1000", "1000.", "1000.5", "1000.50"];
        for input in typed {
            assert!(is_valid_amount(input), "input {:?}", input);
        }

        assert_eq!(convert("1000.50").unwrap(), "壹仟元伍角");
        assert_eq!(validate("1000.505"), Err(ConversionError::InvalidFormat));
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let too_large = convert("1000000000000").unwrap_err();
        assert!(too_large.is_too_large());

        let malformed = convert("12,000").unwrap_err();
        assert!(!malformed.is_too_large());
    }

    #[test]
    fn test_concurrent_use() {
        let converter = Arc::new(Converter::new(ConverterConfig::bank_check()));

        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || {
                    converter.convert_amount(Amount::new(i * 1000 + 5, 0, 0).unwrap())
                })
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], "人民币伍圆整");
        assert_eq!(results[1], "人民币壹仟零伍圆整");
        assert_eq!(results[3], "人民币叁仟零伍圆整");
    }

    proptest! {
        #[test]
        fn prop_output_shape(yuan in 0u64..1_000_000_000_000, jiao in 0u8..10, fen in 0u8..10) {
            let text = convert_amount(Amount::new(yuan, jiao, fen).unwrap());
            let first = text.chars().next().unwrap();

            prop_assert!(first == '零' || NONZERO_DIGITS.contains(first));
            prop_assert!(text.ends_with('整') || text.ends_with('角') || text.ends_with('分'));
            prop_assert_eq!(text.matches('元').count(), 1);
        }

        #[test]
        fn prop_exact_marker_only_for_whole_amounts(yuan in 0u64..1_000_000_000_000, jiao in 0u8..10, fen in 0u8..10) {
            let text = convert_amount(Amount::new(yuan, jiao, fen).unwrap());
            prop_assert_eq!(text.ends_with('整'), jiao == 0 && fen == 0);
        }

        #[test]
        fn prop_string_and_amount_paths_agree(yuan in 0u64..1_000_000_000_000, jiao in 0u8..10, fen in 0u8..10) {
            let amount = Amount::new(yuan, jiao, fen).unwrap();
            prop_assert_eq!(convert(&amount.to_string()).unwrap(), convert_amount(amount));
        }

        #[test]
        fn prop_never_panics_on_arbitrary_input(input in "\\PC{0,20}") {
            let _ = convert(&input);
        }

        #[test]
        fn prop_digit_strings_beyond_cap_are_too_large(digits in "[1-9][0-9]{12,20}") {
            prop_assert_eq!(convert(&digits), Err(ConversionError::AmountTooLarge));
        }
    }
}
