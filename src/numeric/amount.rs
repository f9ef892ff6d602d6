// ============================================================================
// Amount
// Exact yuan/jiao/fen decomposition of a monetary amount
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exclusive upper bound for the integer (yuan) part: 10^12.
pub const YUAN_LIMIT: u64 = 1_000_000_000_000;

/// Maximum number of integer digits accepted by the parser.
pub const MAX_INTEGER_DIGITS: usize = 12;

/// Maximum number of fractional digits (jiao and fen).
pub const MAX_FRACTION_DIGITS: usize = 2;

/// A non-negative monetary amount with at most two decimal places.
///
/// Stored as whole yuan plus one jiao digit and one fen digit, so no binary
/// floating-point value is ever involved. Every constructor enforces
/// `yuan < 10^12` and `jiao, fen <= 9`.
///
/// # Example
/// ```
/// use rmb_formal::numeric::Amount;
///
/// let amount: Amount = "1005.3".parse().unwrap();
/// assert_eq!(amount.yuan(), 1005);
/// assert_eq!(amount.jiao(), 3);
/// assert_eq!(amount.fen(), 0);
/// assert_eq!(amount.to_string(), "1005.30");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Amount {
    yuan: u64,
    jiao: u8,
    fen: u8,
}

impl Amount {
    /// Zero yuan
    pub const ZERO: Self = Self {
        yuan: 0,
        jiao: 0,
        fen: 0,
    };

    /// Largest representable amount, 999999999999.99
    pub const MAX: Self = Self {
        yuan: YUAN_LIMIT - 1,
        jiao: 9,
        fen: 9,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from yuan, jiao and fen.
    ///
    /// # Errors
    /// - `AmountTooLarge` if `yuan >= 10^12`
    /// - `InvalidFormat` if `jiao` or `fen` is not a single digit
    pub fn new(yuan: u64, jiao: u8, fen: u8) -> ConversionResult<Self> {
        if jiao > 9 || fen > 9 {
            return Err(ConversionError::InvalidFormat);
        }
        if yuan >= YUAN_LIMIT {
            return Err(ConversionError::AmountTooLarge);
        }
        Ok(Self { yuan, jiao, fen })
    }

    /// Create from a total number of fen (hundredths of a yuan).
    ///
    /// # Errors
    /// Returns `AmountTooLarge` if the yuan part reaches 10^12.
    pub fn from_fen(total_fen: u64) -> ConversionResult<Self> {
        let yuan = total_fen / 100;
        let cents = total_fen % 100;
        Self::new(yuan, (cents / 10) as u8, (cents % 10) as u8)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole yuan.
    #[inline]
    pub const fn yuan(&self) -> u64 {
        self.yuan
    }

    /// Tenths of a yuan.
    #[inline]
    pub const fn jiao(&self) -> u8 {
        self.jiao
    }

    /// Hundredths of a yuan.
    #[inline]
    pub const fn fen(&self) -> u8 {
        self.fen
    }

    /// The whole amount expressed in fen.
    #[inline]
    pub const fn total_fen(&self) -> u64 {
        self.yuan * 100 + self.jiao as u64 * 10 + self.fen as u64
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.yuan == 0 && self.jiao == 0 && self.fen == 0
    }

    /// True when there are no jiao or fen.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.jiao == 0 && self.fen == 0
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Amount {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Trailing zeros are ignored, so `1.500` is accepted as 1.5.
    ///
    /// # Errors
    /// - `InvalidFormat` for negative values or more than 2 significant decimals
    /// - `AmountTooLarge` if the value is 10^12 or more
    pub fn from_decimal(d: rust_decimal::Decimal) -> ConversionResult<Self> {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::Decimal;

        if d.is_sign_negative() && !d.is_zero() {
            return Err(ConversionError::InvalidFormat);
        }

        let d = d.normalize();
        if d.scale() > MAX_FRACTION_DIGITS as u32 {
            return Err(ConversionError::InvalidFormat);
        }
        if d >= Decimal::from(YUAN_LIMIT) {
            return Err(ConversionError::AmountTooLarge);
        }

        let total_fen = (d * Decimal::ONE_HUNDRED)
            .to_u64()
            .ok_or(ConversionError::InvalidFormat)?;
        Self::from_fen(total_fen)
    }

    /// Convert to `rust_decimal::Decimal` with a scale of 2.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        // total_fen < 10^14, always fits in i64
        rust_decimal::Decimal::new(self.total_fen() as i64, 2)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Check that `input` is an acceptable amount without building one.
///
/// Intended for as-you-type feedback in an input field.
pub fn validate(input: &str) -> ConversionResult<()> {
    parse_parts(input).map(|_| ())
}

/// Boolean form of [`validate`].
pub fn is_valid_amount(input: &str) -> bool {
    validate(input).is_ok()
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Full-width digits U+FF10..=U+FF19, as produced by Chinese input methods.
#[inline]
fn is_fullwidth_digit(c: char) -> bool {
    matches!(c, '０'..='９')
}

/// Map full-width digits to ASCII. Everything else, including the
/// full-width point '．', is left alone for the grammar check to reject.
fn normalize_digits(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_fullwidth_digit) {
        return Cow::Borrowed(s);
    }

    let normalized = s
        .chars()
        .map(|c| {
            if is_fullwidth_digit(c) {
                char::from(b'0' + (u32::from(c) - u32::from('０')) as u8)
            } else {
                c
            }
        })
        .collect();
    Cow::Owned(normalized)
}

/// Split and check `input` against `1-12 digits[.0-2 digits]`.
fn parse_parts(input: &str) -> ConversionResult<(u64, u8, u8)> {
    let normalized = normalize_digits(input.trim());
    let s = normalized.as_ref();
    if s.is_empty() {
        return Err(ConversionError::InvalidFormat);
    }

    let (int_str, frac_str) = s.split_once('.').unwrap_or((s, ""));

    if int_str.is_empty() || !is_digits(int_str) {
        return Err(ConversionError::InvalidFormat);
    }
    // A second '.' lands in frac_str and fails the digit check
    if frac_str.len() > MAX_FRACTION_DIGITS || !is_digits(frac_str) {
        return Err(ConversionError::InvalidFormat);
    }

    if int_str.len() > MAX_INTEGER_DIGITS {
        // Too many digits: decide on the value, not the spelling
        let significant = int_str.trim_start_matches('0');
        return Err(if significant.len() > MAX_INTEGER_DIGITS {
            ConversionError::AmountTooLarge
        } else {
            ConversionError::InvalidFormat
        });
    }

    let yuan = int_str
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

    let mut frac = frac_str.bytes().map(|b| b - b'0');
    let jiao = frac.next().unwrap_or(0);
    let fen = frac.next().unwrap_or(0);

    Ok((yuan, jiao, fen))
}

impl FromStr for Amount {
    type Err = ConversionError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "1005" -> 1005 yuan
    /// - "0.05" -> 5 fen
    /// - "12." -> 12 yuan
    /// - "1.005" -> `InvalidFormat`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (yuan, jiao, fen) = parse_parts(s)?;
        Self::new(yuan, jiao, fen)
    }
}

impl TryFrom<String> for Amount {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.yuan, self.jiao, self.fen)
    }
}

// ============================================================================
// Tests
// ============================================================================
