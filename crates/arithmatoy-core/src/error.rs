//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Errors reported by the arithmetic engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// The base is outside `2..=36`.
    #[error("invalid radix {0}: expected a base between 2 and 36")]
    InvalidRadix(u32),

    /// An operand with no digits.
    #[error("empty operand")]
    EmptyOperand,

    /// A character that is not a digit of the given radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix the operand was checked against.
        radix: u32,
    },

    /// A digit value with no symbol in the alphabet.
    #[error("digit value {0} has no symbol (alphabet has 36 digits)")]
    DigitOutOfRange(u32),

    /// Checked subtraction where the subtrahend exceeds the minuend.
    #[error("subtraction would be negative: lhs is smaller than rhs")]
    NegativeDifference,

    /// Two numbers of different radix were combined.
    #[error("radix mismatch: {lhs} vs {rhs}")]
    RadixMismatch {
        /// Radix of the left operand.
        lhs: u32,
        /// Radix of the right operand.
        rhs: u32,
    },

    /// An operator name that is not `add`, `sub` or `mul`.
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),

    /// A batch line that is not `op base lhs rhs`.
    #[error("malformed expression {0:?}: expected `op base lhs rhs`")]
    MalformedExpression(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = ArithError> = std::result::Result<T, E>;
