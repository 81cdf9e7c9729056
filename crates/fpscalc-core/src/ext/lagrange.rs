//! Coefficients of compositional inverses by Lagrange inversion.
//!
//! With `G` the compositional inverse of `F` (`F(0) = 0`, `F'(0) != 0`):
//!
//! - `[x^n] G = (1/n) [x^(n-1)] (x/F)^n`
//! - `[x^n] H(G) = (1/n) [x^(n-1)] H' (x/F)^n`

use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::calculus::derivative;
use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::recursive::check_zero_constant;
use crate::series::Series;

/// `(x / f)^n mod x^n`.
fn x_over_f_pow(engine: &PolyEngine, f: &Series, n: usize, op: &'static str) -> Result<Vec<ModInt>, PolyError> {
    check_zero_constant(f, op)?;
    if f.coeff(1).is_zero() {
        return Err(PolyError::InvalidArgument(format!(
            "{op}: linear coefficient must be nonzero"
        )));
    }
    let f_over_x = Series::new(f[1..].to_vec());
    let inv = engine.inverse(&f_over_x, n)?;
    Ok(engine.pow(&inv, n as u64, n)?.into_coeffs())
}

/// `[x^n] G` where `G(F(x)) = x`.
pub fn lagrange_inversion_coeff(engine: &PolyEngine, f: &Series, n: usize) -> Result<ModInt, PolyError> {
    debug!(op = "lagrange_inversion", len = f.len(), n, "series operation");
    if n == 0 {
        return Ok(ModInt::ZERO);
    }
    let h = x_over_f_pow(engine, f, n, "lagrange_inversion")?;
    Ok(h[n - 1] * ModInt::from(n).try_inv()?)
}

/// `[x^n] H(G(x))` where `G(F(x)) = x`.
pub fn generalized_lagrange_inversion(
    engine: &PolyEngine,
    f: &Series,
    h: &Series,
    n: usize,
) -> Result<ModInt, PolyError> {
    debug!(op = "generalized_lagrange_inversion", len = f.len(), n, "series operation");
    if n == 0 {
        return Ok(h.coeff(0));
    }
    let pw = x_over_f_pow(engine, f, n, "generalized_lagrange_inversion")?;
    let dh = derivative(h);
    let prod = engine.mul_truncated(&pw, &dh, n)?;
    Ok(prod[n - 1] * ModInt::from(n).try_inv()?)
}
