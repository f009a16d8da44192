//! Owned, normalized numbers tagged with their radix.

use std::cmp::Ordering;
use std::fmt;

use crate::digits::{validate, Radix};
use crate::engine::Engine;
use crate::error::{ArithError, Result};
use crate::normalize::{compare, drop_leading_zeros};

/// A non-negative number stored as a normalized digit string.
///
/// The digits never carry leading zeros; zero is `"0"`. Unlike
/// [`drop_leading_zeros`], which borrows a view of its input, a `Number`
/// owns its buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number {
    radix: Radix,
    digits: String,
}

impl Number {
    /// Parses `digits` in `radix`, dropping any leading zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty or holds a symbol that is not a
    /// digit of `radix`.
    pub fn parse(radix: Radix, digits: &str) -> Result<Self> {
        let digits = drop_leading_zeros(validate(radix, digits)?).to_owned();
        Ok(Self { radix, digits })
    }

    /// The number zero.
    #[must_use]
    pub fn zero(radix: Radix) -> Self {
        Self {
            radix,
            digits: "0".to_owned(),
        }
    }

    /// The number one.
    #[must_use]
    pub fn one(radix: Radix) -> Self {
        Self {
            radix,
            digits: "1".to_owned(),
        }
    }

    /// Returns the radix.
    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Returns the digits, most significant first.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns true if this number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Consumes the number and returns its digit string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.digits
    }

    /// Computes `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::RadixMismatch`] if the radices differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |engine, base, lhs, rhs| engine.add(base, lhs, rhs))
    }

    /// Computes `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::RadixMismatch`] if the radices differ and
    /// [`ArithError::NegativeDifference`] if `self < other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, |engine, base, lhs, rhs| engine.subtract(base, lhs, rhs))
    }

    /// Computes `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::RadixMismatch`] if the radices differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.combine(other, |engine, base, lhs, rhs| engine.multiply(base, lhs, rhs))
    }

    fn combine(
        &self,
        other: &Self,
        op: impl FnOnce(&Engine, u32, &str, &str) -> Result<String>,
    ) -> Result<Self> {
        if self.radix != other.radix {
            return Err(ArithError::RadixMismatch {
                lhs: self.radix.get(),
                rhs: other.radix.get(),
            });
        }
        let digits = op(&Engine::default(), self.radix.get(), &self.digits, &other.digits)?;
        Ok(Self {
            radix: self.radix,
            digits,
        })
    }
}

impl PartialOrd for Number {
    /// Numbers of different radix are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.radix == other.radix).then(|| compare(&self.digits, &other.digits))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let n = Number::parse(Radix::DECIMAL, "000120").unwrap();
        assert_eq!(n.as_str(), "120");
        assert_eq!(n.radix(), Radix::DECIMAL);
        assert!(Number::parse(Radix::DECIMAL, "0000").unwrap().is_zero());
        assert_eq!(Number::parse(Radix::DECIMAL, ""), Err(ArithError::EmptyOperand));
    }

    #[test]
    fn test_string_access() {
        let n = Number::parse(Radix::MAX, "00zz").unwrap();
        let view: &str = n.as_ref();
        assert_eq!(view, "zz");
        assert_eq!(n.clone().into_string(), "zz");
        assert_eq!(n.to_string(), n.as_str());
    }

    #[test]
    fn test_arithmetic() {
        let radix = Radix::HEX;
        let a = Number::parse(radix, "ff").unwrap();
        let one = Number::one(radix);

        let sum = a.checked_add(&one).unwrap();
        assert_eq!(sum.to_string(), "100");
        assert_eq!(sum.checked_sub(&one).unwrap(), a);
        assert_eq!(a.checked_mul(&Number::zero(radix)).unwrap(), Number::zero(radix));
        assert_eq!(
            one.checked_sub(&a),
            Err(ArithError::NegativeDifference)
        );
    }

    #[test]
    fn test_radix_mismatch() {
        let a = Number::parse(Radix::DECIMAL, "10").unwrap();
        let b = Number::parse(Radix::HEX, "10").unwrap();
        assert_eq!(
            a.checked_add(&b),
            Err(ArithError::RadixMismatch { lhs: 10, rhs: 16 })
        );
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_ordering() {
        let radix = Radix::MAX;
        let small = Number::parse(radix, "z").unwrap();
        let large = Number::parse(radix, "10").unwrap();
        assert!(small < large);
        assert_eq!(large.partial_cmp(&large.clone()), Some(Ordering::Equal));
    }
}
