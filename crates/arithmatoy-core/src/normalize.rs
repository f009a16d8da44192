//! Leading-zero normalization and digit-buffer reversal.
//!
//! [`drop_leading_zeros`] borrows: it is used to canonicalize operands before
//! an operation without copying them. [`into_normalized`] owns: it is what
//! every operation result goes through.

use std::cmp::Ordering;

/// Returns the suffix of `number` starting at its first non-`0` digit.
///
/// An all-zero string yields its last character, so the result is `"0"`
/// rather than empty. The empty string is returned unchanged. Idempotent.
#[must_use]
pub fn drop_leading_zeros(number: &str) -> &str {
    let trimmed = number.trim_start_matches('0');
    if trimmed.is_empty() && !number.is_empty() {
        &number[number.len() - 1..]
    } else {
        trimmed
    }
}

/// Strips leading zeros from an owned digit string in place.
#[must_use]
pub fn into_normalized(mut number: String) -> String {
    let keep = drop_leading_zeros(&number).len();
    number.replace_range(..number.len() - keep, "");
    number
}

/// Reverses a digit buffer in place and hands it back.
///
/// Operations build results least-significant digit first; this flips them to
/// the most-significant-first order callers see.
pub fn reverse<T>(buf: &mut [T]) -> &mut [T] {
    let len = buf.len();
    for i in 0..len / 2 {
        buf.swap(i, len - 1 - i);
    }
    buf
}

/// Compares two digit strings of the same radix by value.
///
/// Leading zeros are ignored. Relies on the alphabet being in value order.
#[must_use]
pub fn compare(lhs: &str, rhs: &str) -> Ordering {
    let lhs = drop_leading_zeros(lhs);
    let rhs = drop_leading_zeros(rhs);
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}
