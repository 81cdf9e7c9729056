//! Cyclic and difference convolutions, products of many factors, and
//! semi-online convolution.

use fpscalc_ntt::ModInt;

use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::series::Series;

fn check_period(n: usize) -> Result<(), PolyError> {
    if n == 0 {
        return Err(PolyError::InvalidArgument("cyclic length must be positive".into()));
    }
    Ok(())
}

/// `res[k] = sum a[i] b[j]` over `i + j == k (mod n)`.
pub fn cyclic_convolution(
    engine: &PolyEngine,
    a: &Series,
    b: &Series,
    n: usize,
) -> Result<Series, PolyError> {
    check_period(n)?;
    let product = engine.mul_slices(a, b)?;
    let mut res = vec![ModInt::ZERO; n];
    for (i, c) in product.into_iter().enumerate() {
        res[i % n] += c;
    }
    Ok(Series::new(res))
}

/// Product of `a` with reversed `b`.
///
/// Entry `|b| - 1 + d` holds `sum a[j + d] b[j]`.
pub fn difference_convolution(engine: &PolyEngine, a: &Series, b: &Series) -> Result<Series, PolyError> {
    engine.multiply(a, &b.reversed())
}

/// `res[k] = sum a[i] b[j]` over `i - j == k (mod n)`.
pub fn cyclic_difference_convolution(
    engine: &PolyEngine,
    a: &Series,
    b: &Series,
    n: usize,
) -> Result<Series, PolyError> {
    check_period(n)?;
    let mut b_rev = vec![ModInt::ZERO; n];
    for (i, &c) in b.iter().enumerate() {
        b_rev[(n - i % n) % n] += c;
    }
    cyclic_convolution(engine, a, &Series::new(b_rev), n)
}

/// `a * x^k mod (x^n - 1)`; negative `k` shifts left.
pub fn cyclic_shift(a: &Series, k: i64, n: usize) -> Result<Series, PolyError> {
    check_period(n)?;
    let period = i64::try_from(n)
        .map_err(|_| PolyError::InvalidArgument(format!("cyclic length {n} too large")))?;
    let k = k.rem_euclid(period) as usize;
    let mut res = vec![ModInt::ZERO; n];
    for (i, &c) in a.iter().enumerate() {
        res[(i % n + k) % n] += c;
    }
    Ok(Series::new(res))
}

/// Product of every factor, split in balanced halves.
///
/// The empty product is `1`.
pub fn product_of(engine: &PolyEngine, polys: &[Series]) -> Result<Series, PolyError> {
    match polys {
        [] => Ok(Series::one()),
        [single] => Ok(single.clone()),
        _ => {
            let (lo, hi) = polys.split_at(polys.len() / 2);
            let left = product_of(engine, lo)?;
            let right = product_of(engine, hi)?;
            engine.multiply(&left, &right)
        }
    }
}

/// First `n` terms of `f` with `f[0] = f0` and `f[i] = sum_{0<j<=i} f[i-j] g[j]`.
///
/// Equivalent to `f0 / (1 - g)` when `g[0] = 0`; `g[0]` is ignored.
/// Divide and conquer: the left half of each range is finished before its
/// contribution to the right half is added by one product.
pub fn semi_online_convolution(
    engine: &PolyEngine,
    n: usize,
    g: &Series,
    f0: ModInt,
) -> Result<Series, PolyError> {
    let mut f = vec![ModInt::ZERO; n];
    if n == 0 {
        return Ok(Series::new(f));
    }
    f[0] = f0;
    relax(engine, &mut f, g, 0, n)?;
    Ok(Series::new(f))
}

fn relax(engine: &PolyEngine, f: &mut [ModInt], g: &[ModInt], lo: usize, hi: usize) -> Result<(), PolyError> {
    if hi - lo <= 1 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    relax(engine, f, g, lo, mid)?;

    // g[1..hi-lo], index k holds g[k + 1]
    let tail_end = g.len().min(hi - lo);
    let tail: &[ModInt] = if tail_end > 1 { &g[1..tail_end] } else { &[] };
    let contrib = engine.mul_slices(&f[lo..mid], tail)?;
    for (k, c) in contrib.into_iter().enumerate() {
        let target = lo + k + 1;
        if target >= hi {
            break;
        }
        if target >= mid {
            f[target] += c;
        }
    }

    relax(engine, f, g, mid, hi)
}
