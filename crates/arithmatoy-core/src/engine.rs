//! The public arithmetic surface.
//!
//! An [`Engine`] carries an [`EngineConfig`] and validates, normalizes and
//! traces each call before handing it to the schoolbook routines in
//! [`crate::ops`]. Engines are plain values with no interior state, so one
//! engine can be shared freely across threads.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::digits::{validate, Radix};
use crate::error::{ArithError, Result};
use crate::normalize::{compare, drop_leading_zeros};
use crate::ops;

/// Per-engine settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Emit a debug event on entry to every operation.
    pub verbose: bool,
    /// Reject subtractions whose result would be negative instead of
    /// returning the wrapped difference.
    pub checked_subtraction: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            checked_subtraction: true,
        }
    }
}

impl EngineConfig {
    /// Returns a copy with verbose tracing switched on or off.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns a copy with checked subtraction switched on or off.
    #[must_use]
    pub const fn with_checked_subtraction(mut self, checked: bool) -> Self {
        self.checked_subtraction = checked;
        self
    }
}

/// Arithmetic on digit strings in bases 2 through 36.
///
/// Inputs are borrowed and may carry leading zeros. Outputs are freshly
/// allocated and never have leading zeros, except that zero is `"0"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes `lhs + rhs` in `base`.
    ///
    /// # Errors
    ///
    /// Fails if `base` is outside `2..=36` or an operand is not a non-empty
    /// digit string in `base`.
    pub fn add(&self, base: u32, lhs: &str, rhs: &str) -> Result<String> {
        let (radix, lhs, rhs) = self.prepare("add", base, lhs, rhs)?;
        self.finish("add", ops::add(radix.get(), lhs, rhs))
    }

    /// Computes `lhs - rhs` in `base`.
    ///
    /// With [`EngineConfig::checked_subtraction`] unset, `lhs < rhs` is not
    /// detected and the wrapped difference is returned.
    ///
    /// # Errors
    ///
    /// Fails on an invalid base or operand, and with
    /// [`ArithError::NegativeDifference`] when `lhs < rhs` under checked
    /// subtraction.
    pub fn subtract(&self, base: u32, lhs: &str, rhs: &str) -> Result<String> {
        let (radix, lhs, rhs) = self.prepare("sub", base, lhs, rhs)?;
        if self.config.checked_subtraction && compare(lhs, rhs) == Ordering::Less {
            return Err(ArithError::NegativeDifference);
        }
        self.finish("sub", ops::subtract(radix.get(), lhs, rhs))
    }

    /// Computes `lhs * rhs` in `base`.
    ///
    /// # Errors
    ///
    /// Fails if `base` is outside `2..=36` or an operand is not a non-empty
    /// digit string in `base`.
    pub fn multiply(&self, base: u32, lhs: &str, rhs: &str) -> Result<String> {
        let (radix, lhs, rhs) = self.prepare("mul", base, lhs, rhs)?;
        self.finish("mul", ops::multiply(radix.get(), lhs, rhs))
    }

    fn prepare<'a>(
        &self,
        op: &'static str,
        base: u32,
        lhs: &'a str,
        rhs: &'a str,
    ) -> Result<(Radix, &'a str, &'a str)> {
        if self.config.verbose {
            debug!(op, base, lhs_len = lhs.len(), rhs_len = rhs.len(), "{op}: entering function");
        }
        let radix = Radix::new(base)?;
        let lhs = drop_leading_zeros(validate(radix, lhs)?);
        let rhs = drop_leading_zeros(validate(radix, rhs)?);
        Ok((radix, lhs, rhs))
    }

    fn finish(&self, op: &'static str, result: Result<String>) -> Result<String> {
        if self.config.verbose {
            match &result {
                Ok(value) => trace!(op, len = value.len(), "{op}: done"),
                Err(err) => debug!(op, %err, "{op}: failed"),
            }
        }
        result
    }
}

/// Computes `lhs + rhs` in `base` with the default engine.
///
/// # Errors
///
/// See [`Engine::add`].
pub fn add(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    Engine::default().add(base, lhs, rhs)
}

/// Computes `lhs - rhs` in `base` with the default engine, which rejects
/// negative results.
///
/// # Errors
///
/// See [`Engine::subtract`].
pub fn subtract(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    Engine::default().subtract(base, lhs, rhs)
}

/// Computes `lhs * rhs` in `base` with the default engine.
///
/// # Errors
///
/// See [`Engine::multiply`].
pub fn multiply(base: u32, lhs: &str, rhs: &str) -> Result<String> {
    Engine::default().multiply(base, lhs, rhs)
}
