//! Command-line front end.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use arithmatoy_core::{evaluate_batch, BatchConfig, Engine, EngineConfig, Expression, Op, Radix};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Arbitrary-precision arithmetic on digit strings", long_about = None)]
pub struct Cli {
    /// Trace every operation on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Return the wrapped difference instead of failing when lhs < rhs
    #[arg(long, global = true)]
    pub unchecked: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print lhs + rhs
    Add(Operands),
    /// Print lhs - rhs
    Sub(Operands),
    /// Print lhs * rhs
    Mul(Operands),
    /// Evaluate `op base lhs rhs` lines, one result per line
    Batch {
        /// Input file (use '-' to read from stdin)
        input: String,

        /// Minimum number of lines to evaluate in parallel
        #[arg(long, default_value = "64")]
        parallel_threshold: usize,
    },
}

/// Operands of a single operation.
#[derive(Args, Debug, PartialEq, Eq)]
pub struct Operands {
    /// Base between 2 and 36
    pub base: u32,
    /// Left operand
    pub lhs: String,
    /// Right operand
    pub rhs: String,
}

impl Cli {
    /// Builds the engine configuration selected by the flags.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_verbose(self.verbose)
            .with_checked_subtraction(!self.unchecked)
    }

    /// Builds the log filter from the `RUST_LOG`-style `directives`, if any.
    ///
    /// `--verbose` always enables the engine's debug events, whatever the
    /// directives say.
    ///
    /// # Errors
    ///
    /// Fails only if the engine directive does not parse.
    pub fn log_filter(&self, directives: Option<&str>) -> Result<EnvFilter> {
        let default = if self.verbose { "debug" } else { "warn" };
        let filter = directives
            .and_then(|dirs| EnvFilter::try_new(dirs).ok())
            .unwrap_or_else(|| EnvFilter::new(default));
        if !self.verbose {
            return Ok(filter);
        }
        Ok(filter.add_directive("arithmatoy_core=debug".parse::<Directive>()?))
    }
}

/// Runs the parsed command, writing results to `out`.
///
/// # Errors
///
/// Fails if an operation fails, the batch input cannot be read, or any batch
/// line fails. Successful batch lines are still written.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let engine = Engine::new(cli.engine_config());

    let (op, operands) = match &cli.command {
        Command::Add(operands) => (Op::Add, operands),
        Command::Sub(operands) => (Op::Sub, operands),
        Command::Mul(operands) => (Op::Mul, operands),
        Command::Batch {
            input,
            parallel_threshold,
        } => {
            let config = BatchConfig {
                parallel_threshold: *parallel_threshold,
            };
            return run_batch(&engine, &read_input(input)?, &config, out);
        }
    };

    let radix = Radix::new(operands.base).with_context(|| format!("{op} failed"))?;
    let expr = Expression::new(op, radix, operands.lhs.as_str(), operands.rhs.as_str());
    let result = engine
        .evaluate(&expr)
        .with_context(|| format!("{op} in base {} failed", operands.base))?;
    writeln!(out, "{result}")?;
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read file {input}"))
    }
}

/// Evaluates each non-blank, non-`#` line of `content`.
fn run_batch(
    engine: &Engine,
    content: &str,
    config: &BatchConfig,
    out: &mut impl Write,
) -> Result<()> {
    let parsed: Vec<_> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::parse::<Expression>)
        .collect();

    let exprs: Vec<Expression> = parsed.iter().filter_map(|p| p.as_ref().ok()).cloned().collect();
    let mut evaluated = evaluate_batch(engine, &exprs, config).into_iter();
    info!(lines = parsed.len(), valid = exprs.len(), "batch evaluated");

    let mut failures = 0usize;
    for line in parsed {
        let result = match line {
            Ok(_) => evaluated.next(),
            Err(err) => Some(Err(err)),
        };
        let Some(result) = result else { break };
        match result {
            Ok(value) => writeln!(out, "{value}")?,
            Err(err) => {
                failures += 1;
                writeln!(out, "error: {err}")?;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{failures} expression(s) failed"));
    }
    Ok(())
}
