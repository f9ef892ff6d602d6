// ============================================================================
// Integer-Part Renderer
// Four-digit grouping with per-group zero-run collapsing
// ============================================================================

use crate::domain::{split_groups, DigitGroup, NumeralTables};
use crate::numeric::{ConversionError, ConversionResult, YUAN_LIMIT};

// ============================================================================
// Zero-Run State Machine
// ============================================================================

/// Per-group zero-run state.
///
/// Zeros are never written when seen; they only arm `Pending`. The next
/// nonzero digit in the same group flushes a single zero numeral, so a run of
/// any length collapses to one 零 and a trailing run writes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroRun {
    #[default]
    Clear,
    Pending,
}

/// What a single digit writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitEmission {
    /// Zero digit, nothing written yet
    Nothing,
    /// Digit numeral plus position unit
    Digit,
    /// 零, then digit numeral plus position unit
    ZeroThenDigit,
}

impl ZeroRun {
    /// Advance the state machine by one digit.
    #[inline]
    pub const fn step(self, digit: u8) -> (ZeroRun, DigitEmission) {
        match (self, digit) {
            (_, 0) => (ZeroRun::Pending, DigitEmission::Nothing),
            (ZeroRun::Clear, _) => (ZeroRun::Clear, DigitEmission::Digit),
            (ZeroRun::Pending, _) => (ZeroRun::Clear, DigitEmission::ZeroThenDigit),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Append one group's digits (without its scale unit) to `out`.
///
/// Returns true if anything was written.
fn write_group(group: &DigitGroup, tables: &NumeralTables, out: &mut String) -> bool {
    let mut state = ZeroRun::Clear;
    let mut wrote = false;

    for (digit, position) in group.positioned() {
        let (next, emission) = state.step(digit);
        state = next;

        match emission {
            DigitEmission::Nothing => continue,
            DigitEmission::ZeroThenDigit => out.push_str(tables.zero()),
            DigitEmission::Digit => {},
        }
        out.push_str(tables.digit(digit));
        out.push_str(tables.position(position));
        wrote = true;
    }

    wrote
}

/// Append the rendering of `yuan` to `out`.
///
/// Callers guarantee `yuan < 10^12`; the scale table has no unit beyond 亿.
pub(crate) fn write_integer(yuan: u64, tables: &NumeralTables, out: &mut String) {
    debug_assert!(yuan < YUAN_LIMIT);

    if yuan == 0 {
        out.push_str(tables.zero());
        return;
    }

    let start = out.len();
    let groups = split_groups(yuan);
    let count = groups.len();

    for (index, group) in groups.iter().enumerate() {
        // All-zero groups contribute neither digits nor their scale unit
        if write_group(group, tables, out) {
            out.push_str(tables.scale(count - 1 - index).unwrap_or_default());
        }
    }

    if out.len() == start {
        out.push_str(tables.zero());
    }
}

/// Render the integer part of an amount with the formal numerals, without the
/// currency unit.
///
/// # Errors
/// Returns `AmountTooLarge` if `yuan >= 10^12`.
///
/// # Example
/// ```
/// use rmb_formal::engine::render_integer;
///
/// assert_eq!(render_integer(1005).unwrap(), "壹仟零伍");
/// assert_eq!(render_integer(100_000_000).unwrap(), "壹亿");
/// ```
pub fn render_integer(yuan: u64) -> ConversionResult<String> {
    render_integer_with(yuan, &NumeralTables::FORMAL)
}

/// [`render_integer`] with explicit tables.
pub fn render_integer_with(yuan: u64, tables: &NumeralTables) -> ConversionResult<String> {
    if yuan >= YUAN_LIMIT {
        return Err(ConversionError::AmountTooLarge);
    }
    let mut out = String::with_capacity(64);
    write_integer(yuan, tables, &mut out);
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(n: u64) -> String {
        render_integer(n).unwrap()
    }

    #[test]
    fn test_zero_run_transitions() {
        assert_eq!(ZeroRun::Clear.step(0), (ZeroRun::Pending, DigitEmission::Nothing));
        assert_eq!(ZeroRun::Pending.step(0), (ZeroRun::Pending, DigitEmission::Nothing));
        assert_eq!(ZeroRun::Clear.step(4), (ZeroRun::Clear, DigitEmission::Digit));
        assert_eq!(
            ZeroRun::Pending.step(4),
            (ZeroRun::Clear, DigitEmission::ZeroThenDigit)
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(render(0), "零");
    }

    #[test]
    fn test_single_group() {
        assert_eq!(render(1), "壹");
        assert_eq!(render(10), "壹拾");
        assert_eq!(render(15), "壹拾伍");
        assert_eq!(render(1234), "壹仟贰佰叁拾肆");
    }

    #[test]
    fn test_zero_run_collapses() {
        assert_eq!(render(1005), "壹仟零伍");
        assert_eq!(render(1050), "壹仟零伍拾");
        assert_eq!(render(1001), "壹仟零壹");
        assert_eq!(render(101), "壹佰零壹");
    }

    #[test]
    fn test_trailing_zeros_suppressed() {
        assert_eq!(render(1000), "壹仟");
        assert_eq!(render(1100), "壹仟壹佰");
        assert_eq!(render(20), "贰拾");
    }

    #[test]
    fn test_scales() {
        assert_eq!(render(10_000), "壹万");
        assert_eq!(render(100_000_000), "壹亿");
        assert_eq!(render(120_000), "壹拾贰万");
        assert_eq!(render(123_456_789_012), "壹仟贰佰叁拾肆亿伍仟陆佰柒拾捌万玖仟零壹拾贰");
    }

    #[test]
    fn test_inner_group_leading_zeros() {
        assert_eq!(render(10_001), "壹万零壹");
        assert_eq!(render(10_010_000), "壹仟零壹万");
        assert_eq!(render(100_010_000), "壹亿零壹万");
        assert_eq!(render(100_000_001), "壹亿零壹");
        assert_eq!(render(10_000_100), "壹仟万零壹佰");
    }

    #[test]
    fn test_zero_group_keeps_neighbour_scales() {
        assert_eq!(render(500_000_006), "伍亿零陆");
        assert_eq!(render(200_030_000), "贰亿零叁万");
        // A zero group between two full groups leaves no marker behind
        assert_eq!(render(999_900_009_999), "玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖");
    }

    #[test]
    fn test_max() {
        assert_eq!(
            render(999_999_999_999),
            "玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(render_integer(YUAN_LIMIT), Err(ConversionError::AmountTooLarge));
        assert_eq!(render_integer(u64::MAX), Err(ConversionError::AmountTooLarge));
    }

    const NONZERO_DIGITS: &str = "壹贰叁肆伍陆柒捌玖";

    proptest! {
        #[test]
        fn prop_non_empty_and_deterministic(n in 0u64..YUAN_LIMIT) {
            let first = render(n);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, render(n));
        }

        #[test]
        fn prop_starts_with_significant_numeral(n in 1u64..YUAN_LIMIT) {
            let first = render(n).chars().next().unwrap();
            prop_assert!(NONZERO_DIGITS.contains(first));
        }

        #[test]
        fn prop_never_ends_with_zero(n in 1u64..YUAN_LIMIT) {
            prop_assert!(!render(n).ends_with('零'));
        }

        #[test]
        fn prop_no_doubled_zero(n in 0u64..YUAN_LIMIT) {
            prop_assert!(!render(n).contains("零零"));
        }

        #[test]
        fn prop_one_zero_per_internal_run(
            head in 1u64..10,
            zeros in 1usize..3,
            tail in 1u64..10,
        ) {
            // head, `zeros` zeros, tail inside a single group
            let n = head * 10u64.pow(zeros as u32 + 1) + tail;
            let text = render(n);
            prop_assert_eq!(text.matches('零').count(), 1);
        }

        #[test]
        fn prop_digit_count_matches_nonzero_digits(n in 1u64..YUAN_LIMIT) {
            let expected = n.to_string().chars().filter(|&c| c != '0').count();
            let actual = render(n).chars().filter(|&c| NONZERO_DIGITS.contains(c)).count();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_scale_units_follow_nonzero_groups(n in 1u64..YUAN_LIMIT) {
            let text = render(n);
            let wan_group = (n / 10_000) % 10_000;
            let yi_group = n / 100_000_000;
            prop_assert_eq!(text.contains('万'), wan_group != 0);
            prop_assert_eq!(text.contains('亿'), yi_group != 0);
        }
    }
}
