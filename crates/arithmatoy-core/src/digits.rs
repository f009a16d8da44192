//! The digit alphabet and radix handling.
//!
//! Digits are `0`-`9` followed by `a`-`z`, so a digit's value is its index in
//! [`DIGITS`]. Because the alphabet is in value order, byte comparison of two
//! digits agrees with numeric comparison.

use std::fmt;

use crate::error::{ArithError, Result};

/// Every digit symbol, indexed by value.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in [`DIGITS`].
pub const ALL_DIGIT_COUNT: u32 = 36;

/// A base in `2..=36`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Binary.
    pub const BINARY: Self = Self(2);
    /// Decimal.
    pub const DECIMAL: Self = Self(10);
    /// Hexadecimal.
    pub const HEX: Self = Self(16);
    /// The largest supported base.
    pub const MAX: Self = Self(ALL_DIGIT_COUNT);

    /// Creates a radix.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidRadix`] if `base` is outside `2..=36`.
    pub const fn new(base: u32) -> Result<Self> {
        if base >= 2 && base <= ALL_DIGIT_COUNT {
            Ok(Self(base))
        } else {
            Err(ArithError::InvalidRadix(base))
        }
    }

    /// Returns the base as a `u32`.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the symbols usable in this radix.
    #[must_use]
    pub fn alphabet(self) -> &'static [u8] {
        &DIGITS[..self.0 as usize]
    }
}

impl TryFrom<u32> for Radix {
    type Error = ArithError;

    fn try_from(base: u32) -> Result<Self> {
        Self::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a digit symbol to its value in `0..36`.
///
/// # Errors
///
/// Returns [`ArithError::InvalidDigit`] for bytes outside the alphabet. The
/// reported radix is 36 since no base is in play here.
pub fn digit_value(digit: u8) -> Result<u32> {
    match digit {
        b'0'..=b'9' => Ok(u32::from(digit - b'0')),
        b'a'..=b'z' => Ok(10 + u32::from(digit - b'a')),
        _ => Err(ArithError::InvalidDigit {
            digit: char::from(digit),
            radix: ALL_DIGIT_COUNT,
        }),
    }
}

/// Maps a value in `0..36` to its digit symbol.
///
/// A failure here means a carry or borrow produced a value with no symbol,
/// which valid input never does.
///
/// # Errors
///
/// Returns [`ArithError::DigitOutOfRange`] if `value >= 36`.
pub fn to_digit(value: u32) -> Result<u8> {
    DIGITS
        .get(value as usize)
        .copied()
        .ok_or(ArithError::DigitOutOfRange(value))
}

/// Checks that `number` is a non-empty digit string in `radix`.
///
/// Returns the input unchanged so calls can be chained.
///
/// # Errors
///
/// Returns [`ArithError::EmptyOperand`] for `""` and
/// [`ArithError::InvalidDigit`] for the first byte whose value is not below
/// the base.
pub fn validate(radix: Radix, number: &str) -> Result<&str> {
    if number.is_empty() {
        return Err(ArithError::EmptyOperand);
    }
    let invalid = |c: char| ArithError::InvalidDigit {
        digit: c,
        radix: radix.get(),
    };
    for c in number.chars() {
        let byte = u8::try_from(c).map_err(|_| invalid(c))?;
        match digit_value(byte) {
            Ok(value) if value < radix.get() => {}
            _ => return Err(invalid(c)),
        }
    }
    Ok(number)
}
