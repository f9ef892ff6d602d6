// ============================================================================
// Digit Groups
// Four-digit sections of the integer part, most-significant first
// ============================================================================

use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Digits per group (one 万 step).
pub const GROUP_WIDTH: usize = 4;

/// Numeric base of a group, 10^GROUP_WIDTH.
pub const GROUP_BASE: u64 = 10_000;

/// Up to four decimal digits, most-significant first.
///
/// The leading group of a number carries only its significant digits
/// (`"12"` for 12_0000), every following group is zero padded to four
/// (`"0005"`), because a leading zero inside an inner group is a real zero
/// run that must be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroup {
    digits: ArrayVec<u8, GROUP_WIDTH>,
}

/// Groups of one number, most-significant first. Three groups cover the
/// whole supported range, so no heap allocation happens in practice.
pub type DigitGroups = SmallVec<[DigitGroup; 3]>;

impl DigitGroup {
    /// Build a group from a chunk value below `GROUP_BASE`.
    fn from_chunk(chunk: u64, padded: bool) -> Self {
        debug_assert!(chunk < GROUP_BASE);

        let mut digits = ArrayVec::new();
        let mut started = padded;
        let mut divisor = GROUP_BASE / 10;
        while divisor > 0 {
            let digit = (chunk / divisor % 10) as u8;
            if digit != 0 || started || divisor == 1 {
                digits.push(digit);
                started = true;
            }
            divisor /= 10;
        }
        Self { digits }
    }

    /// Raw digits, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Digits paired with their position from the right end of the group
    /// (0 = ones, 3 = thousands), most-significant first.
    pub fn positioned(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        let last = self.digits.len() - 1;
        self.digits
            .iter()
            .enumerate()
            .map(move |(i, &digit)| (digit, last - i))
    }
}

/// Split `value` into four-digit groups counted from the least-significant
/// end, returned most-significant first.
///
/// `0` yields a single group holding one zero digit.
pub fn split_groups(value: u64) -> DigitGroups {
    let mut chunks: SmallVec<[u64; 5]> = SmallVec::new();
    let mut rest = value;
    loop {
        chunks.push(rest % GROUP_BASE);
        rest /= GROUP_BASE;
        if rest == 0 {
            break;
        }
    }

    chunks
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &chunk)| DigitGroup::from_chunk(chunk, i != 0))
        .collect()
}
