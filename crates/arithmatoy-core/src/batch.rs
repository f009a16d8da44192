//! Evaluating many expressions at once.
//!
//! Engine calls share no state, so a batch can be spread over rayon's
//! work-stealing pool without any locking.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::digits::Radix;
use crate::engine::Engine;
use crate::error::{ArithError, Result};

/// An arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
}

impl Op {
    /// Returns the short name of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
        }
    }
}

impl FromStr for Op {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" | "+" => Ok(Op::Add),
            "sub" | "-" => Ok(Op::Sub),
            "mul" | "*" => Ok(Op::Mul),
            other => Err(ArithError::UnknownOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single computation: `lhs op rhs` in `radix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    /// The operator.
    pub op: Op,
    /// The radix both operands are written in.
    pub radix: Radix,
    /// Left operand.
    pub lhs: String,
    /// Right operand.
    pub rhs: String,
}

impl Expression {
    /// Creates an expression.
    pub fn new(op: Op, radix: Radix, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            op,
            radix,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl FromStr for Expression {
    type Err = ArithError;

    /// Parses `op base lhs rhs`, separated by whitespace. The base must be a
    /// decimal number in `2..=36`; the operands are checked on evaluation.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ArithError::MalformedExpression(s.trim().to_owned());
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[op, base, lhs, rhs] = fields.as_slice() else {
            return Err(malformed());
        };
        let op = op.parse()?;
        let radix = Radix::new(base.parse().map_err(|_| malformed())?)?;
        Ok(Self::new(op, radix, lhs, rhs))
    }
}

impl Engine {
    /// Evaluates one expression.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn evaluate(&self, expr: &Expression) -> Result<String> {
        let base = expr.radix.get();
        match expr.op {
            Op::Add => self.add(base, &expr.lhs, &expr.rhs),
            Op::Sub => self.subtract(base, &expr.lhs, &expr.rhs),
            Op::Mul => self.multiply(base, &expr.lhs, &expr.rhs),
        }
    }
}

/// Configuration for batch evaluation.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum batch size to evaluate in parallel.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Evaluates every expression, returning one result per input in order.
///
/// Batches smaller than [`BatchConfig::parallel_threshold`] run on the
/// calling thread.
pub fn evaluate_batch(
    engine: &Engine,
    exprs: &[Expression],
    config: &BatchConfig,
) -> Vec<Result<String>> {
    if exprs.len() < config.parallel_threshold {
        return exprs.iter().map(|expr| engine.evaluate(expr)).collect();
    }
    exprs.par_iter().map(|expr| engine.evaluate(expr)).collect()
}
