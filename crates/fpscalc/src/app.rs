//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use fpscalc_core::ext::linear_recurrence;
use fpscalc_core::{ModInt, PolyEngine, Series};

use crate::config::{parse_series, parse_values, AppConfig, Command};
use crate::errors::CliError;

/// Result of one subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// A truncated series.
    Series(Series),
    /// Quotient and remainder.
    Division {
        /// Quotient.
        quotient: Series,
        /// Remainder.
        remainder: Series,
    },
    /// Values at a list of points.
    Values(Vec<ModInt>),
    /// A single field element.
    Scalar(ModInt),
}

impl Output {
    /// Render as text or JSON.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string(self).context("serializing output");
        }
        Ok(match self {
            Self::Series(s) => s.to_string(),
            Self::Division {
                quotient,
                remainder,
            } => format!("{quotient}\n{remainder}"),
            Self::Values(values) => Series::from(values.clone()).to_string(),
            Self::Scalar(x) => x.to_string(),
        })
    }
}

/// Run the application, printing to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(config, &mut handle)
}

/// Run the application, printing to `out`.
pub fn run_with_writer(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let engine = PolyEngine::new(config.engine_options());
    let output = execute(&config.command, &engine)?;
    let stats = engine.stats();
    debug!(
        acquisitions = stats.acquisitions,
        peak_words = stats.peak_words,
        high_water = engine.high_water_mark(),
        cached_lengths = engine.cached_transform_lengths(),
        "engine state after command"
    );
    writeln!(out, "{}", output.render(config.json)?).context("writing output")?;
    Ok(())
}

/// Execute one subcommand on `engine`.
pub fn execute(command: &Command, engine: &PolyEngine) -> Result<Output, CliError> {
    info!(?command, "executing");
    let output = match command {
        Command::Mul { a, b } => {
            Output::Series(engine.multiply(&parse_series(a)?, &parse_series(b)?)?)
        }
        Command::Inv { a, n } => Output::Series(engine.inverse(&parse_series(a)?, *n)?),
        Command::Ln { a, n } => Output::Series(engine.ln(&parse_series(a)?, *n)?),
        Command::Exp { a, n } => Output::Series(engine.exp(&parse_series(a)?, *n)?),
        Command::Sqrt { a, n } => Output::Series(engine.sqrt(&parse_series(a)?, *n)?),
        Command::Pow { a, k, n } => Output::Series(engine.pow(&parse_series(a)?, *k, *n)?),
        Command::Div { a, b } => {
            let (quotient, remainder) = engine.div_rem(&parse_series(a)?, &parse_series(b)?)?;
            Output::Division {
                quotient,
                remainder,
            }
        }
        Command::Eval { a, points } => {
            let points: Vec<ModInt> = parse_values(points)?
                .into_iter()
                .map(ModInt::from_i64)
                .collect();
            Output::Values(engine.eval_many(&parse_series(a)?, &points)?)
        }
        Command::Recurrence { coeffs, init, n } => {
            let coeffs = parse_series(coeffs)?;
            let init = parse_series(init)?;
            Output::Scalar(linear_recurrence(engine, *n, &coeffs, &init)?)
        }
    };
    Ok(output)
}
