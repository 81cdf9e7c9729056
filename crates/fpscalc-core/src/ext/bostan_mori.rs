//! `[x^n] P(x) / Q(x)` by Bostan–Mori, and linear recurrences on top of it.

use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::series::Series;

/// Coefficient of `x^n` in the power series `p / q`.
///
/// Each round multiplies by `q(-x)` and keeps the even or odd half, halving
/// `n`. Requires `q[0] != 0`.
pub fn bostan_mori(engine: &PolyEngine, n: u64, p: &Series, q: &Series) -> Result<ModInt, PolyError> {
    debug!(op = "bostan_mori", n, p = p.len(), q = q.len(), "series operation");
    if q.coeff(0).is_zero() {
        return Err(PolyError::ZeroConstantTerm { op: "bostan_mori" });
    }
    let mut n = n;
    let mut p = p.coeffs().to_vec();
    let mut q = q.coeffs().to_vec();
    while n > 0 {
        let q_neg: Vec<ModInt> = q
            .iter()
            .enumerate()
            .map(|(i, &c)| if i % 2 == 1 { -c } else { c })
            .collect();
        let u = engine.mul_slices(&p, &q_neg)?;
        let v = engine.mul_slices(&q, &q_neg)?;
        let parity = usize::from(n % 2 == 1);
        p = u.into_iter().skip(parity).step_by(2).collect();
        q = v.into_iter().step_by(2).collect();
        n >>= 1;
    }
    let head = p.first().copied().unwrap_or(ModInt::ZERO);
    Ok(head * q[0].try_inv()?)
}

/// Term `n` of `a_k = c_1 a_{k-1} + ... + c_d a_{k-d}`.
///
/// `coeffs` is `c_1..c_d` and `init` holds at least `a_0..a_{d-1}`.
pub fn linear_recurrence(
    engine: &PolyEngine,
    n: u64,
    coeffs: &[ModInt],
    init: &[ModInt],
) -> Result<ModInt, PolyError> {
    let d = coeffs.len();
    if init.len() < d {
        return Err(PolyError::InvalidArgument(format!(
            "recurrence of order {d} needs {d} initial terms, got {}",
            init.len()
        )));
    }
    if let Some(&term) = usize::try_from(n).ok().filter(|&i| i < d).and_then(|i| init.get(i)) {
        return Ok(term);
    }

    // Q = 1 - sum c_i x^i, P = (A Q) mod x^d
    let mut q = Vec::with_capacity(d + 1);
    q.push(ModInt::ONE);
    q.extend(coeffs.iter().map(|&c| -c));
    let p = engine.mul_truncated(&init[..d], &q, d)?;
    bostan_mori(engine, n, &Series::new(p), &Series::new(q))
}
