//! Schoolbook addition, subtraction and multiplication on digit strings.
//!
//! These routines assume operands that are already validated for their base
//! and stripped of leading zeros; [`crate::Engine`] takes care of both. Each
//! walks its operands from the least significant digit (the end of the
//! string) and builds the result in that order before reversing it.

use crate::digits::{digit_value, to_digit};
use crate::error::Result;
use crate::normalize::{into_normalized, reverse};

/// Value of the `i`-th digit counted from the least significant end, or 0
/// past the most significant digit.
fn digit_at(number: &[u8], i: usize) -> Result<u32> {
    match number.len().checked_sub(i + 1) {
        Some(pos) => digit_value(number[pos]),
        None => Ok(0),
    }
}

/// Turns a least-significant-first buffer of digit values into a normalized
/// digit string.
fn finish(mut values: Vec<u32>) -> Result<String> {
    reverse(&mut values);
    let digits = values
        .into_iter()
        .map(|value| to_digit(value).map(char::from))
        .collect::<Result<String>>()?;
    Ok(into_normalized(digits))
}

/// Computes `lhs + rhs`.
///
/// The shorter operand is treated as zero-padded on the left; the loop runs
/// on while a carry remains, which adds at most one digit.
pub(crate) fn add(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    let max_len = lhs.len().max(rhs.len());
    let mut result = Vec::with_capacity(max_len + 1);

    let mut carry = 0;
    let mut i = 0;
    while i < max_len || carry != 0 {
        let sum = digit_at(lhs, i)? + digit_at(rhs, i)? + carry;
        result.push(sum % base);
        carry = sum / base;
        i += 1;
    }

    finish(result)
}

/// Computes `lhs - rhs`.
///
/// Runs over the digits of `lhs` only. If `lhs < rhs` the final borrow is
/// dropped and the result is the wrapped difference, so callers that care
/// must compare first.
pub(crate) fn subtract(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    let mut result = Vec::with_capacity(lhs.len());

    let mut borrow = 0;
    for i in 0..lhs.len() {
        let minuend = digit_at(lhs, i)?;
        let subtrahend = digit_at(rhs, i)? + borrow;
        if minuend >= subtrahend {
            result.push(minuend - subtrahend);
            borrow = 0;
        } else {
            result.push(minuend + base - subtrahend);
            borrow = 1;
        }
    }

    finish(result)
}

/// Computes `lhs * rhs` by long multiplication.
///
/// The accumulator holds `len(lhs) + len(rhs)` digits, enough for any
/// product, and starts at zero. Row `i` adds `lhs[i] * rhs` shifted by `i`
/// positions, propagating the carry until it is spent.
pub(crate) fn multiply(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    let mut acc = vec![0u32; lhs.len() + rhs.len()];

    for i in 0..lhs.len() {
        let lhs_digit = digit_at(lhs, i)?;
        if lhs_digit == 0 {
            continue;
        }

        let mut carry = 0;
        let mut j = 0;
        while j < rhs.len() || carry != 0 {
            let current = carry + acc[i + j] + lhs_digit * digit_at(rhs, j)?;
            acc[i + j] = current % base;
            carry = current / base;
            j += 1;
        }
    }

    finish(acc)
}
