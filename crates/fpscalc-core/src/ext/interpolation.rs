//! Quadratic Lagrange interpolation and evaluation from consecutive samples.
//!
//! Fast interpolation lives on [`PolyEngine::interpolate`](crate::PolyEngine::interpolate).

use fpscalc_ntt::ModInt;

use crate::calculus::factorials;
use crate::error::PolyError;
use crate::series::Series;

/// The polynomial of degree below `xs.len()` through every `(xs[i], ys[i])`,
/// in `O(n^2)`.
pub fn lagrange_interpolate(xs: &[ModInt], ys: &[ModInt]) -> Result<Series, PolyError> {
    if xs.len() != ys.len() {
        return Err(PolyError::InvalidArgument(format!(
            "{} nodes but {} values",
            xs.len(),
            ys.len()
        )));
    }
    let n = xs.len();

    // M = prod (x - x_i)
    let mut m = vec![ModInt::ONE];
    for &x in xs {
        let mut next = vec![ModInt::ZERO; m.len() + 1];
        for (j, &c) in m.iter().enumerate() {
            next[j] -= c * x;
            next[j + 1] += c;
        }
        m = next;
    }

    let mut res = vec![ModInt::ZERO; n];
    for (j, (&xj, &yj)) in xs.iter().zip(ys).enumerate() {
        let den: ModInt = xs
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != j)
            .map(|(_, &xi)| xj - xi)
            .product();
        let den_inv = den.checked_inv().ok_or_else(|| {
            PolyError::InvalidArgument(format!("repeated interpolation node {xj}"))
        })?;
        let weight = yj * den_inv;

        // M / (x - x_j) by synthetic division
        let mut carry = ModInt::ZERO;
        for i in (1..=n).rev() {
            let q = m[i] + carry * xj;
            res[i - 1] += q * weight;
            carry = q;
        }
    }
    Ok(Series::new(res))
}

/// Value at `x` of the polynomial of degree `ys.len() - 1` with `P(i) = ys[i]`.
///
/// Linear time through prefix and suffix products of `x - i`.
pub fn lagrange_consecutive(ys: &[ModInt], x: ModInt) -> Result<ModInt, PolyError> {
    if ys.is_empty() {
        return Err(PolyError::InvalidArgument("no samples".into()));
    }
    let n = ys.len() - 1;
    if let Some(&y) = ys.get(x.value() as usize) {
        return Ok(y);
    }

    // pre[i] = prod_{k < i} (x - k), suf[i] = prod_{k > i} (x - k)
    let mut pre = vec![ModInt::ONE; n + 1];
    for i in 1..=n {
        pre[i] = pre[i - 1] * (x - ModInt::from(i - 1));
    }
    let mut suf = vec![ModInt::ONE; n + 1];
    for i in (0..n).rev() {
        suf[i] = suf[i + 1] * (x - ModInt::from(i + 1));
    }

    let fact = factorials(n);
    let mut inv_fact = vec![ModInt::ZERO; n + 1];
    inv_fact[n] = fact[n].try_inv()?;
    for i in (0..n).rev() {
        inv_fact[i] = inv_fact[i + 1] * ModInt::from(i + 1);
    }

    // prod_{k != i} (i - k) = (-1)^(n-i) i! (n-i)!
    let mut acc = ModInt::ZERO;
    for (i, &y) in ys.iter().enumerate() {
        let term = y * pre[i] * suf[i] * inv_fact[i] * inv_fact[n - i];
        if (n - i) % 2 == 1 {
            acc -= term;
        } else {
            acc += term;
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpscalc_ntt::MODULUS;

    fn ints(vals: &[i64]) -> Vec<ModInt> {
        vals.iter().map(|&v| ModInt::from_i64(v)).collect()
    }

    #[test]
    fn quadratic_through_three_points() {
        // 2x^2 - 3x + 1
        let xs = ints(&[0, 1, 2]);
        let ys = ints(&[1, 0, 3]);
        assert_eq!(lagrange_interpolate(&xs, &ys).unwrap(), Series::from_i64s(&[1, -3, 2]));
    }

    #[test]
    fn matches_fast_interpolation() {
        let e = crate::PolyEngine::default();
        let xs: Vec<ModInt> = (0..20).map(|i| ModInt::from_i64(i * 7 - 30)).collect();
        let ys: Vec<ModInt> = (0..20).map(|i| ModInt::from_i64(i * i * i - 5)).collect();
        assert_eq!(lagrange_interpolate(&xs, &ys).unwrap(), e.interpolate(&xs, &ys).unwrap());
    }

    #[test]
    fn interpolate_rejects_repeats() {
        assert!(matches!(
            lagrange_interpolate(&ints(&[4, 4]), &ints(&[1, 2])),
            Err(PolyError::InvalidArgument(_))
        ));
        assert!(lagrange_interpolate(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn consecutive_squares() {
        let ys = ints(&[0, 1, 4]);
        assert_eq!(lagrange_consecutive(&ys, ModInt::new(2)).unwrap(), ModInt::new(4));
        assert_eq!(lagrange_consecutive(&ys, ModInt::new(10)).unwrap(), ModInt::new(100));
        assert_eq!(
            lagrange_consecutive(&ys, ModInt::new(u64::from(MODULUS) - 1)).unwrap(),
            ModInt::ONE
        );
    }

    #[test]
    fn consecutive_sum_of_cubes() {
        // sum_{k<=x} k^3 = (x(x+1)/2)^2, degree 4
        let ys: Vec<ModInt> = (0..5u64)
            .map(|x| ModInt::new((0..=x).map(|k| k * k * k).sum()))
            .collect();
        let x = 1_000u64;
        let expected = ModInt::new(x * (x + 1) / 2).pow(2);
        assert_eq!(lagrange_consecutive(&ys, ModInt::new(x)).unwrap(), expected);
        assert!(lagrange_consecutive(&[], ModInt::ONE).is_err());
    }
}
