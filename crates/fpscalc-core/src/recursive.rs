//! Newton doubling: inverse, logarithm, exponential, square root and power.
//!
//! Each `*_into` routine writes a result correct modulo `x^n` into
//! `res[..n]`. It first computes the result to precision `ceil(n/2)` in the
//! same buffer, then extends it with one or two length-`2n` transforms whose
//! operands are checked out of the engine's scratch arena. Scratch guards are
//! dropped in reverse order of acquisition before each frame returns.
//!
//! Inputs may be shorter than `n`; missing coefficients are zero.

use fpscalc_ntt::{transform_len, ModInt};
use tracing::debug;

use crate::calculus::inverses_upto;
use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::series::Series;

fn coeff(a: &[ModInt], i: usize) -> ModInt {
    a.get(i).copied().unwrap_or(ModInt::ZERO)
}

fn prefix(a: &[ModInt], n: usize) -> &[ModInt] {
    &a[..a.len().min(n)]
}

impl PolyEngine {
    /// Multiplicative inverse modulo `x^n`; requires `a[0] != 0`.
    pub fn inverse(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "inverse", len = a.len(), precision = n, "series operation");
        if a.coeff(0).is_zero() {
            return Err(PolyError::ZeroConstantTerm { op: "inverse" });
        }
        check_precision(n)?;
        let mut res = vec![ModInt::ZERO; n];
        if n > 0 {
            self.inverse_into(a, n, &mut res)?;
        }
        Ok(Series::new(res))
    }

    /// Logarithm modulo `x^n`; requires `a[0] == 1`.
    pub fn ln(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "ln", len = a.len(), precision = n, "series operation");
        check_unit_constant(a, "ln")?;
        check_precision(n)?;
        let mut res = vec![ModInt::ZERO; n];
        if n > 0 {
            self.ln_into(a, n, &mut res)?;
        }
        Ok(Series::new(res))
    }

    /// Exponential modulo `x^n`; requires `a[0] == 0`.
    pub fn exp(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "exp", len = a.len(), precision = n, "series operation");
        check_zero_constant(a, "exp")?;
        check_precision(n)?;
        let mut res = vec![ModInt::ZERO; n];
        if n > 0 {
            self.exp_into(a, n, &mut res)?;
        }
        Ok(Series::new(res))
    }

    /// Square root modulo `x^n`.
    ///
    /// Leading zeros below `x^n` must come in an even number and the lowest
    /// nonzero coefficient must be a quadratic residue; its root is the smaller
    /// of the two representatives. A series that vanishes modulo `x^n` has the
    /// zero root.
    pub fn sqrt(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "sqrt", len = a.len(), precision = n, "series operation");
        check_precision(n)?;
        let mut res = vec![ModInt::ZERO; n];
        let Some(s) = prefix(a, n).iter().position(|c| !c.is_zero()) else {
            return Ok(Series::new(res));
        };
        let lowest = a[s];
        if s % 2 == 1 {
            return Err(PolyError::NoSquareRoot {
                degree: s,
                constant: lowest,
            });
        }
        let root = lowest.sqrt().ok_or(PolyError::NoSquareRoot {
            degree: s,
            constant: lowest,
        })?;
        let shift = s / 2;
        if shift < n {
            self.sqrt_into(&a[s..], n - shift, root, &mut res[shift..])?;
        }
        Ok(Series::new(res))
    }

    /// `a^k` modulo `x^n` for any `k >= 0`.
    ///
    /// Factors `a = c * x^s * b` with `b[0] = 1`, then returns
    /// `c^k * x^(s*k) * exp(k * ln(b))`. `a^0` is `1`.
    pub fn pow(&self, a: &Series, k: u64, n: usize) -> Result<Series, PolyError> {
        debug!(op = "pow", len = a.len(), exponent = k, precision = n, "series operation");
        check_precision(n)?;
        let mut res = vec![ModInt::ZERO; n];
        if n == 0 {
            return Ok(Series::new(res));
        }
        if k == 0 {
            res[0] = ModInt::ONE;
            return Ok(Series::new(res));
        }
        let Some(s) = a.iter().position(|c| !c.is_zero()) else {
            return Ok(Series::new(res));
        };
        let shift = match usize::try_from(u128::from(k) * s as u128) {
            Ok(shift) if shift < n => shift,
            _ => return Ok(Series::new(res)),
        };
        let m = n - shift;
        let c = a[s];
        let c_inv = c.try_inv()?;
        let normalized: Vec<ModInt> = prefix(&a[s..], m).iter().map(|&x| x * c_inv).collect();

        let mut log = vec![ModInt::ZERO; m];
        self.ln_into(&normalized, m, &mut log)?;
        let k_mod = ModInt::new(k);
        for x in &mut log {
            *x *= k_mod;
        }
        self.exp_into(&log, m, &mut res[shift..])?;

        let scale = c.pow(k);
        for x in &mut res[shift..] {
            *x *= scale;
        }
        Ok(Series::new(res))
    }

    pub(crate) fn inverse_into(
        &self,
        a: &[ModInt],
        n: usize,
        res: &mut [ModInt],
    ) -> Result<(), PolyError> {
        if n == 1 {
            res[0] = coeff(a, 0)
                .checked_inv()
                .ok_or(PolyError::ZeroConstantTerm { op: "inverse" })?;
            return Ok(());
        }
        let half = n.div_ceil(2);
        self.inverse_into(a, half, res)?;

        let limit = transform_len(2 * n)?;
        let conv = self.convolver();
        let t = conv.transform();
        let mut ta = conv.arena().acquire(limit);
        let mut tb = conv.arena().acquire(limit);
        ta.load(prefix(a, n));
        tb.load(&res[..half]);
        t.forward(&mut ta)?;
        t.forward(&mut tb)?;
        // b (2 - a b)
        let two = ModInt::new(2);
        for (x, &y) in ta.iter_mut().zip(tb.iter()) {
            *x = (two - *x * y) * y;
        }
        t.inverse(&mut ta)?;
        res[..n].copy_from_slice(&ta[..n]);
        Ok(())
    }

    pub(crate) fn ln_into(&self, a: &[ModInt], n: usize, res: &mut [ModInt]) -> Result<(), PolyError> {
        res[0] = ModInt::ZERO;
        if n == 1 {
            return Ok(());
        }

        let limit = transform_len(2 * n)?;
        let conv = self.convolver();
        let t = conv.transform();
        let mut ta = conv.arena().acquire(limit);
        for i in 1..n {
            ta[i - 1] = coeff(a, i) * ModInt::from(i);
        }
        let mut tb = conv.arena().acquire(limit);
        self.inverse_into(a, n, &mut tb)?;
        t.forward(&mut ta)?;
        t.forward(&mut tb)?;
        for (x, &y) in ta.iter_mut().zip(tb.iter()) {
            *x *= y;
        }
        t.inverse(&mut ta)?;

        let inv = inverses_upto(n - 1);
        for i in 1..n {
            res[i] = ta[i - 1] * inv[i];
        }
        Ok(())
    }

    pub(crate) fn exp_into(&self, a: &[ModInt], n: usize, res: &mut [ModInt]) -> Result<(), PolyError> {
        if n == 1 {
            res[0] = ModInt::ONE;
            return Ok(());
        }
        let half = n.div_ceil(2);
        self.exp_into(a, half, res)?;
        res[half..n].fill(ModInt::ZERO);

        let limit = transform_len(2 * n)?;
        let conv = self.convolver();
        let t = conv.transform();
        let mut ta = conv.arena().acquire(limit);
        self.ln_into(&res[..half], n, &mut ta)?;
        // 1 - ln(b) + a
        for (i, x) in ta[..n].iter_mut().enumerate() {
            *x = coeff(a, i) - *x;
        }
        ta[0] += ModInt::ONE;
        let mut tb = conv.arena().acquire(limit);
        tb.load(&res[..half]);
        t.forward(&mut ta)?;
        t.forward(&mut tb)?;
        for (x, &y) in ta.iter_mut().zip(tb.iter()) {
            *x *= y;
        }
        t.inverse(&mut ta)?;
        res[..n].copy_from_slice(&ta[..n]);
        Ok(())
    }

    pub(crate) fn sqrt_into(
        &self,
        a: &[ModInt],
        n: usize,
        root: ModInt,
        res: &mut [ModInt],
    ) -> Result<(), PolyError> {
        if n == 1 {
            res[0] = root;
            return Ok(());
        }
        let half = n.div_ceil(2);
        self.sqrt_into(a, half, root, res)?;
        res[half..n].fill(ModInt::ZERO);

        let limit = transform_len(2 * n)?;
        let conv = self.convolver();
        let t = conv.transform();
        let mut ta = conv.arena().acquire(limit);
        self.inverse_into(&res[..half], n, &mut ta)?;
        let mut tb = conv.arena().acquire(limit);
        tb.load(prefix(a, n));
        t.forward(&mut ta)?;
        t.forward(&mut tb)?;
        for (x, &y) in ta.iter_mut().zip(tb.iter()) {
            *x *= y;
        }
        t.inverse(&mut ta)?;
        // (b + a / b) / 2
        let inv2 = ModInt::new(2).inv();
        for (x, &y) in res[..n].iter_mut().zip(ta.iter()) {
            *x = (*x + y) * inv2;
        }
        Ok(())
    }
}

/// Precision `n` must leave room for the length-`2n` doubling transforms.
pub(crate) fn check_precision(n: usize) -> Result<(), PolyError> {
    if n > 1 {
        transform_len(n.saturating_mul(2))?;
    }
    Ok(())
}

pub(crate) fn check_unit_constant(a: &[ModInt], op: &'static str) -> Result<(), PolyError> {
    match coeff(a, 0) {
        c if c == ModInt::ONE => Ok(()),
        c if c.is_zero() => Err(PolyError::ZeroConstantTerm { op }),
        found => Err(PolyError::NonUnitConstantTerm { op, found }),
    }
}

pub(crate) fn check_zero_constant(a: &[ModInt], op: &'static str) -> Result<(), PolyError> {
    let found = coeff(a, 0);
    if found.is_zero() {
        Ok(())
    } else {
        Err(PolyError::NonZeroConstantTerm { op, found })
    }
}
