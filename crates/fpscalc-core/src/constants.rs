//! Constants for the engine configuration.

pub use fpscalc_ntt::field::{IMAGINARY_UNIT, MODULUS, PRIMITIVE_ROOT, TWO_ADICITY};
pub use fpscalc_ntt::MAX_TRANSFORM_LEN;

/// Default operand length at or below which products are computed schoolbook-style.
pub const DEFAULT_NAIVE_THRESHOLD: usize = fpscalc_ntt::convolution::DEFAULT_NAIVE_THRESHOLD;

/// Default size of the first scratch buffer, in scalars.
pub const DEFAULT_ARENA_CAPACITY: usize = 1 << 16;

/// Bytes reserved up front for a subproduct tree, per evaluation point.
pub const TREE_BYTES_PER_POINT: usize = 64;

/// Exit codes used by the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid input or configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// A series precondition does not hold.
    pub const ERROR_PRECONDITION: i32 = 5;
}
