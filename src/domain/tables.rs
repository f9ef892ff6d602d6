// ============================================================================
// Numeral Tables
// Static lookup data for formal (anti-fraud) Chinese numerals
// ============================================================================

/// Read-only numeral lookup tables.
///
/// A table set is plain `&'static str` data and is never mutated. The only
/// variation supported is the choice of currency unit and exact marker, see
/// [`ConverterConfig::tables`](crate::domain::ConverterConfig::tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralTables {
    /// Digit numerals 0-9
    pub digits: [&'static str; 10],
    /// Position units within a four-digit group: ones, tens, hundreds, thousands
    pub positions: [&'static str; 4],
    /// Scale units per group, counted from the least-significant group
    pub scales: [&'static str; 3],
    /// Appended after the integer part
    pub currency_unit: &'static str,
    /// Tenths of the currency unit
    pub jiao_unit: &'static str,
    /// Hundredths of the currency unit
    pub fen_unit: &'static str,
    /// Written instead of jiao/fen when both are zero
    pub exact_marker: &'static str,
}

impl NumeralTables {
    /// The standard formal numerals used on cheques, invoices and contracts.
    pub const FORMAL: Self = Self {
        digits: ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"],
        positions: ["", "拾", "佰", "仟"],
        scales: ["", "万", "亿"],
        currency_unit: "元",
        jiao_unit: "角",
        fen_unit: "分",
        exact_marker: "整",
    };

    /// Numeral for a single decimal digit.
    ///
    /// `digit` must be in `0..=9`.
    #[inline]
    pub fn digit(&self, digit: u8) -> &'static str {
        self.digits[digit as usize]
    }

    /// The zero numeral, used both alone and as the zero-run marker.
    #[inline]
    pub const fn zero(&self) -> &'static str {
        self.digits[0]
    }

    /// Position unit for a digit `position` places from the right of its group.
    #[inline]
    pub fn position(&self, position: usize) -> &'static str {
        self.positions[position]
    }

    /// Scale unit for the group `index_from_end` groups from the right, if the
    /// table has one.
    #[inline]
    pub fn scale(&self, index_from_end: usize) -> Option<&'static str> {
        self.scales.get(index_from_end).copied()
    }
}

impl Default for NumeralTables {
    fn default() -> Self {
        Self::FORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_digits() {
        let t = NumeralTables::FORMAL;
        assert_eq!(t.zero(), "零");
        assert_eq!(t.digit(1), "壹");
        assert_eq!(t.digit(9), "玖");
        assert_eq!(t.digits.concat(), "零壹贰叁肆伍陆柒捌玖");
    }

    #[test]
    fn test_units() {
        let t = NumeralTables::default();
        assert_eq!(t.position(0), "");
        assert_eq!(t.position(3), "仟");
        assert_eq!(t.scale(0), Some(""));
        assert_eq!(t.scale(2), Some("亿"));
        assert_eq!(t.scale(3), None);
    }

    #[test]
    fn test_no_ordinary_numerals() {
        // Formal numerals exist so that 一/二/三 cannot be altered by adding strokes
        let t = NumeralTables::FORMAL;
        for ordinary in ["一", "二", "三", "十", "百", "千"] {
            assert!(!t.digits.contains(&ordinary));
            assert!(!t.positions.contains(&ordinary));
        }
    }
}
