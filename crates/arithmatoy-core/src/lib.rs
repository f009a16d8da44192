//! # arithmatoy-core
//!
//! Arbitrary precision unsigned arithmetic on digit strings.
//!
//! Numbers are strings of the digits `0`-`9` then `a`-`z`, most significant
//! first, in any base from 2 to 36. This crate provides:
//! - Schoolbook addition, subtraction and multiplication ([`Engine`])
//! - Digit/value conversion and radix validation ([`digits`])
//! - Leading-zero normalization ([`normalize`])
//! - An owned, radix-tagged number type ([`Number`])
//! - Parallel batch evaluation ([`evaluate_batch`])
//!
//! ```
//! use arithmatoy_core::{add, multiply, subtract};
//!
//! assert_eq!(add(10, "999", "1").unwrap(), "1000");
//! assert_eq!(subtract(16, "100", "1").unwrap(), "ff");
//! assert_eq!(multiply(2, "101", "11").unwrap(), "1111");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod digits;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod number;
mod ops;

#[cfg(test)]
mod proptests;

pub use batch::{evaluate_batch, BatchConfig, Expression, Op};
pub use digits::{digit_value, to_digit, validate, Radix, ALL_DIGIT_COUNT, DIGITS};
pub use engine::{add, multiply, subtract, Engine, EngineConfig};
pub use error::{ArithError, Result};
pub use normalize::{compare, drop_leading_zeros, into_normalized, reverse};
pub use number::Number;
