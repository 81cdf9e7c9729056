//! Error type for series operations.

use fpscalc_ntt::{ModInt, NttError};

/// Error type for series operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// The constant term is zero where an invertible one is required.
    #[error("{op}: constant term must be nonzero")]
    ZeroConstantTerm {
        /// Operation that rejected the input.
        op: &'static str,
    },

    /// The constant term must be exactly one.
    #[error("{op}: constant term must be 1, found {found}")]
    NonUnitConstantTerm {
        /// Operation that rejected the input.
        op: &'static str,
        /// Constant term that was supplied.
        found: ModInt,
    },

    /// The constant term must be zero.
    #[error("{op}: constant term must be 0, found {found}")]
    NonZeroConstantTerm {
        /// Operation that rejected the input.
        op: &'static str,
        /// Constant term that was supplied.
        found: ModInt,
    },

    /// The divisor's highest-index coefficient is zero, or the divisor is empty.
    #[error("divisor has a zero leading coefficient")]
    ZeroLeadingCoefficient,

    /// The series has no square root.
    #[error("no square root exists: lowest term is {constant}*x^{degree}")]
    NoSquareRoot {
        /// Degree of the lowest nonzero term.
        degree: usize,
        /// Coefficient of the lowest nonzero term.
        constant: ModInt,
    },

    /// Transform-level failure, including capacity violations.
    #[error(transparent)]
    Transform(#[from] NttError),

    /// Malformed arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PolyError {
    /// Whether this error is a violated precondition on series values.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::ZeroConstantTerm { .. }
                | Self::NonUnitConstantTerm { .. }
                | Self::NonZeroConstantTerm { .. }
                | Self::ZeroLeadingCoefficient
                | Self::NoSquareRoot { .. }
                | Self::Transform(NttError::ZeroInverse)
        )
    }
}
