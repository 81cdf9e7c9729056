//! Error handling and exit codes.

use fpscalc_core::constants::exit_codes;
use fpscalc_core::{NttError, PolyError};

/// Errors raised by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A series or point list did not parse.
    #[error("cannot parse value `{0}`")]
    Parse(String),

    /// The series engine rejected the input.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Exit code for a series engine error.
#[must_use]
pub fn exit_code(err: &PolyError) -> i32 {
    if err.is_precondition() {
        exit_codes::ERROR_PRECONDITION
    } else if matches!(
        err,
        PolyError::InvalidArgument(_) | PolyError::Transform(NttError::CapacityExceeded { .. })
    ) {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Handle an application error and return the appropriate exit code.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return match cli {
            CliError::Parse(_) => exit_codes::ERROR_CONFIG,
            CliError::Poly(poly) => exit_code(poly),
        };
    }
    match err.downcast_ref::<PolyError>() {
        Some(poly) => exit_code(poly),
        None => exit_codes::ERROR_GENERIC,
    }
}
