//! Formal derivative and integral.

use fpscalc_ntt::{ModInt, MODULUS};

/// Coefficient `i` is `a[i + 1] * (i + 1)`; one shorter than `a`.
#[must_use]
pub fn derivative(a: &[ModInt]) -> Vec<ModInt> {
    a.iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| c * ModInt::from(i))
        .collect()
}

/// Coefficient `0` is zero and coefficient `i + 1` is `a[i] / (i + 1)`;
/// one longer than `a`.
#[must_use]
pub fn integral(a: &[ModInt]) -> Vec<ModInt> {
    let inv = inverses_upto(a.len());
    let mut out = Vec::with_capacity(a.len() + 1);
    out.push(ModInt::ZERO);
    out.extend(a.iter().enumerate().map(|(i, &c)| c * inv[i + 1]));
    out
}

/// Table of `1/i` for `i` in `1..=n`; entry 0 is zero.
///
/// Uses `1/i = -(P / i) * 1/(P mod i)`, so the table is linear-time.
/// `n` must be below the modulus.
#[must_use]
pub(crate) fn inverses_upto(n: usize) -> Vec<ModInt> {
    let p = MODULUS as usize;
    debug_assert!(n < p);
    let mut inv = vec![ModInt::ZERO; n + 1];
    if n >= 1 {
        inv[1] = ModInt::ONE;
    }
    for i in 2..=n {
        inv[i] = -(ModInt::from(p / i) * inv[p % i]);
    }
    inv
}

/// Table of `i!` for `i` in `0..=n`.
#[must_use]
pub(crate) fn factorials(n: usize) -> Vec<ModInt> {
    let mut fact = Vec::with_capacity(n + 1);
    fact.push(ModInt::ONE);
    for i in 1..=n {
        let prev = fact[i - 1];
        fact.push(prev * ModInt::from(i));
    }
    fact
}
