//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use fpscalc_core::{EngineOptions, Series};

use crate::errors::CliError;

/// fpscalc: formal power series arithmetic modulo 998244353.
///
/// Series are given as comma- or space-separated integers, lowest degree
/// first; every value is reduced modulo 998244353.
#[derive(Parser, Debug)]
#[command(name = "fpscalc", version, about)]
pub struct AppConfig {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON.
    #[arg(long, global = true, env = "FPSCALC_JSON")]
    pub json: bool,

    /// Verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operand length at or below which products are computed schoolbook-style
    /// (0 = default).
    #[arg(long, global = true, default_value = "0", env = "FPSCALC_NAIVE_THRESHOLD")]
    pub naive_threshold: usize,

    /// Initial scratch arena size in scalars (0 = default).
    #[arg(long, global = true, default_value = "0", env = "FPSCALC_ARENA_CAPACITY")]
    pub arena_capacity: usize,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Product of two series.
    Mul {
        /// First factor.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second factor.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Multiplicative inverse modulo x^n.
    Inv {
        /// Series with a nonzero constant term.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Precision.
        #[arg(short, long)]
        n: usize,
    },
    /// Logarithm modulo x^n.
    Ln {
        /// Series with constant term 1.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Precision.
        #[arg(short, long)]
        n: usize,
    },
    /// Exponential modulo x^n.
    Exp {
        /// Series with constant term 0.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Precision.
        #[arg(short, long)]
        n: usize,
    },
    /// Square root modulo x^n.
    Sqrt {
        /// Series to take the root of.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Precision.
        #[arg(short, long)]
        n: usize,
    },
    /// Power a^k modulo x^n.
    Pow {
        /// Base series.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Exponent.
        #[arg(short, long)]
        k: u64,
        /// Precision.
        #[arg(short, long)]
        n: usize,
    },
    /// Quotient and remainder of polynomial division.
    Div {
        /// Dividend.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Divisor with a nonzero leading coefficient.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Evaluate a polynomial at many points.
    Eval {
        /// Polynomial.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Evaluation points.
        #[arg(long, allow_hyphen_values = true)]
        points: String,
    },
    /// Term n of a linear recurrence a_k = c_1 a_{k-1} + ... + c_d a_{k-d}.
    Recurrence {
        /// Coefficients c_1..c_d.
        #[arg(long, allow_hyphen_values = true)]
        coeffs: String,
        /// Initial terms a_0..a_{d-1}.
        #[arg(long, allow_hyphen_values = true)]
        init: String,
        /// Index of the requested term.
        #[arg(short, long)]
        n: u64,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options from the global flags.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            naive_threshold: self.naive_threshold,
            arena_capacity: self.arena_capacity,
        }
        .normalize()
    }
}

/// Parse comma- or whitespace-separated integers.
pub fn parse_values(s: &str) -> Result<Vec<i64>, CliError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| CliError::Parse(tok.to_string()))
        })
        .collect()
}

/// Parse a series argument.
pub fn parse_series(s: &str) -> Result<Series, CliError> {
    Ok(Series::from_i64s(&parse_values(s)?))
}
