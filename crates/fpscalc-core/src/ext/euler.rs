//! Euler transform: `prod_{i>=1} (1 - x^i)^(-a_i)` through one exponential.

use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::calculus::inverses_upto;
use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::recursive::check_precision;
use crate::series::Series;

/// `prod_{i>=1} (1 - x^i)^(-a[i]) mod x^(n+1)`; `a[0]` is ignored.
///
/// The logarithm of the product is `sum_j x^j / j * sum_{i | j} i a[i]`,
/// built by a harmonic sieve.
pub fn euler_transform(engine: &PolyEngine, a: &[ModInt], n: usize) -> Result<Series, PolyError> {
    debug!(op = "euler_transform", len = a.len(), n, "series operation");
    check_precision(n.saturating_add(1))?;
    let mut sum = vec![ModInt::ZERO; n + 1];
    for (i, &ai) in a.iter().enumerate().take(n + 1).skip(1) {
        if ai.is_zero() {
            continue;
        }
        let weight = ai * ModInt::from(i);
        for slot in sum.iter_mut().step_by(i).skip(1) {
            *slot += weight;
        }
    }

    let inv = inverses_upto(n);
    let log: Series = sum
        .iter()
        .zip(&inv)
        .map(|(&s, &r)| s * r)
        .collect();
    engine.exp(&log, n + 1)
}

/// `prod (1 - x^e) mod x^(n+1)` over `exponents`.
///
/// A zero exponent contributes the factor `0`.
pub fn product_one_minus_x_pow(
    engine: &PolyEngine,
    exponents: &[usize],
    n: usize,
) -> Result<Series, PolyError> {
    check_precision(n.saturating_add(1))?;
    if exponents.contains(&0) {
        return Ok(Series::zeros(n + 1));
    }
    let mut count = vec![ModInt::ZERO; n + 1];
    for &e in exponents {
        if e <= n {
            count[e] -= ModInt::ONE;
        }
    }
    euler_transform(engine, &count, n)
}
