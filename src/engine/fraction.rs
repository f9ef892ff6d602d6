// ============================================================================
// Fractional-Part Renderer
// Jiao/fen lookup with the exact marker for whole amounts
// ============================================================================

use crate::domain::NumeralTables;
use crate::numeric::{ConversionError, ConversionResult};

/// Append the jiao/fen rendering to `out`.
///
/// Unlike the integer part, a zero jiao is simply skipped: 0.05 is 伍分,
/// never 零伍分. Callers guarantee both digits are in `0..=9`.
pub(crate) fn write_fraction(jiao: u8, fen: u8, tables: &NumeralTables, out: &mut String) {
    if jiao == 0 && fen == 0 {
        out.push_str(tables.exact_marker);
        return;
    }

    if jiao != 0 {
        out.push_str(tables.digit(jiao));
        out.push_str(tables.jiao_unit);
    }
    if fen != 0 {
        out.push_str(tables.digit(fen));
        out.push_str(tables.fen_unit);
    }
}

/// Render the part written after the currency unit.
///
/// # Errors
/// Returns `InvalidFormat` if either digit is above 9.
///
/// # Example
/// ```
/// use rmb_formal::engine::render_fraction;
///
/// assert_eq!(render_fraction(0, 0).unwrap(), "整");
/// assert_eq!(render_fraction(5, 0).unwrap(), "伍角");
/// assert_eq!(render_fraction(0, 5).unwrap(), "伍分");
/// ```
pub fn render_fraction(jiao: u8, fen: u8) -> ConversionResult<String> {
    render_fraction_with(jiao, fen, &NumeralTables::FORMAL)
}

/// [`render_fraction`] with explicit tables.
pub fn render_fraction_with(jiao: u8, fen: u8, tables: &NumeralTables) -> ConversionResult<String> {
    if jiao > 9 || fen > 9 {
        return Err(ConversionError::InvalidFormat);
    }
    let mut out = String::with_capacity(16);
    write_fraction(jiao, fen, tables, &mut out);
    Ok(out)
}
