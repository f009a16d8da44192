//! # Arithmatoy
//!
//! An arbitrary-precision calculator for unsigned numbers written as digit
//! strings in bases 2 through 36.
//!
//! The arithmetic lives in [`arithmatoy_core`]; this crate re-exports it and
//! provides the command-line front end in [`cli`].
//!
//! ## Quick Start
//!
//! ```
//! use arithmatoy::prelude::*;
//!
//! let engine = Engine::new(EngineConfig::default());
//! assert_eq!(engine.multiply(10, "99", "99").unwrap(), "9801");
//!
//! let a = Number::parse(Radix::HEX, "ff").unwrap();
//! assert_eq!(a.checked_add(&Number::one(Radix::HEX)).unwrap().as_str(), "100");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use arithmatoy_core as core;

pub mod cli;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arithmatoy_core::{
        add, evaluate_batch, multiply, subtract, ArithError, BatchConfig, Engine, EngineConfig,
        Expression, Number, Op, Radix,
    };
}
