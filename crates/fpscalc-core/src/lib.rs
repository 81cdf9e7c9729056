//! # fpscalc-core
//!
//! Truncated formal power series modulo 998244353.
//!
//! Newton doubling for inverse, logarithm, exponential, square root and
//! power; division with remainder; multi-point evaluation and interpolation
//! over a subproduct tree; and the extensions built from them (Bostan–Mori,
//! Lagrange inversion, Euler transform, convolution variants).
//!
//! Every operation that needs scratch space is a method on [`PolyEngine`].
//! The operators and convenience methods on [`Series`] use a per-thread
//! default engine.

pub mod calculus;
pub mod constants;
pub mod division;
pub mod engine;
pub mod error;
pub mod ext;
pub mod options;
pub(crate) mod recursive;
pub mod series;
pub(crate) mod subproduct;
pub(crate) mod trig;

// Re-exports
pub use constants::{exit_codes, DEFAULT_ARENA_CAPACITY, DEFAULT_NAIVE_THRESHOLD};
pub use engine::{with_default_engine, PolyEngine};
pub use error::PolyError;
pub use fpscalc_ntt::{ModInt, NttError, MODULUS};
pub use options::EngineOptions;
pub use series::Series;

/// Interpolate through `(xs[i], ys[i])` on the default engine.
///
/// # Example
/// ```
/// use fpscalc_core::{interpolate, ModInt, Series};
///
/// let xs = [ModInt::new(1), ModInt::new(2)];
/// let ys = [ModInt::new(3), ModInt::new(5)];
/// assert_eq!(interpolate(&xs, &ys).unwrap(), Series::from_i64s(&[1, 2]));
/// ```
pub fn interpolate(xs: &[ModInt], ys: &[ModInt]) -> Result<Series, PolyError> {
    with_default_engine(|e| e.interpolate(xs, ys))
}
