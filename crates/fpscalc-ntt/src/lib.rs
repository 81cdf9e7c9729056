//! # fpscalc-ntt
//!
//! Arithmetic modulo the NTT-friendly prime 998244353 and the number-theoretic
//! transform built on it.
//!
//! - [`ModInt`]: reduced scalar with field operations, inverses and square roots.
//! - [`Transform`]: in-place radix-2 NTT with a memoized bit-reversal table.
//! - [`Convolver`]: zero-padded convolution backed by a LIFO scratch arena.

pub mod bitrev;
pub mod convolution;
pub mod error;
pub mod field;
pub mod transform;

// Re-exports
pub use convolution::{multiply_naive, transform_len, Convolver};
pub use error::NttError;
pub use field::{ModInt, MODULUS, PRIMITIVE_ROOT, TWO_ADICITY};
pub use transform::{Direction, Transform, MAX_TRANSFORM_LEN};
