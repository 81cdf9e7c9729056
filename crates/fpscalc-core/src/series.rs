//! The `Series` type: dense coefficients of a truncated formal power series.
//!
//! Coefficient `i` is the coefficient of `x^i`. The length is a working
//! precision, not necessarily the degree plus one.
//!
//! Operators (`+ - * / %`) and the convenience methods run on the calling
//! thread's default [`PolyEngine`](crate::engine::PolyEngine). Use an engine
//! directly to control the scratch arena.

use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use fpscalc_ntt::ModInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::engine::with_default_engine;
use crate::error::PolyError;

/// A formal power series truncated to a working precision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<ModInt>);

impl Series {
    /// Wrap already-reduced coefficients.
    #[must_use]
    pub fn new(coeffs: Vec<ModInt>) -> Self {
        Self(coeffs)
    }

    /// Build from signed integers, each reduced modulo `P`.
    #[must_use]
    pub fn from_i64s(values: &[i64]) -> Self {
        values.iter().map(|&v| ModInt::from_i64(v)).collect()
    }

    /// Build from unsigned integers, each reduced modulo `P`.
    #[must_use]
    pub fn from_u64s(values: &[u64]) -> Self {
        values.iter().map(|&v| ModInt::new(v)).collect()
    }

    /// `n` zero coefficients.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self(vec![ModInt::ZERO; n])
    }

    /// The constant series `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(vec![ModInt::ONE])
    }

    /// The monomial `x^k`.
    #[must_use]
    pub fn monomial(k: usize) -> Self {
        let mut coeffs = vec![ModInt::ZERO; k + 1];
        coeffs[k] = ModInt::ONE;
        Self(coeffs)
    }

    /// Coefficients as a slice.
    #[must_use]
    pub fn coeffs(&self) -> &[ModInt] {
        &self.0
    }

    /// Take ownership of the coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<ModInt> {
        self.0
    }

    /// Coefficient `i`, or zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> ModInt {
        self.0.get(i).copied().unwrap_or(ModInt::ZERO)
    }

    /// Copy truncated or zero-padded to exactly `n` coefficients.
    #[must_use]
    pub fn truncated(&self, n: usize) -> Self {
        let mut coeffs = self.0[..self.len().min(n)].to_vec();
        coeffs.resize(n, ModInt::ZERO);
        Self(coeffs)
    }

    /// Truncate or zero-pad in place to exactly `n` coefficients.
    pub fn resize(&mut self, n: usize) {
        self.0.resize(n, ModInt::ZERO);
    }

    /// Drop trailing zero coefficients.
    pub fn shrink(&mut self) -> &mut Self {
        while self.0.last().is_some_and(|c| c.is_zero()) {
            self.0.pop();
        }
        self
    }

    /// Degree of the highest nonzero coefficient, or `None` for zero.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.0.iter().rposition(|c| !c.is_zero())
    }

    /// Coefficients in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.0.iter().rev().copied().collect()
    }

    /// Multiply every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: ModInt) -> Self {
        self.0.iter().map(|&c| c * k).collect()
    }

    /// Evaluate at `x` by Horner's rule.
    #[must_use]
    pub fn eval(&self, x: ModInt) -> ModInt {
        self.0.iter().rev().fold(ModInt::ZERO, |acc, &c| acc * x + c)
    }

    /// Formal derivative, one coefficient shorter.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self(crate::calculus::derivative(&self.0))
    }

    /// Formal integral with zero constant term, one coefficient longer.
    #[must_use]
    pub fn integral(&self) -> Self {
        Self(crate::calculus::integral(&self.0))
    }

    /// Multiplicative inverse modulo `x^n`.
    pub fn inverse(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.inverse(self, n))
    }

    /// Logarithm modulo `x^n`; requires a unit constant term.
    pub fn ln(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.ln(self, n))
    }

    /// Exponential modulo `x^n`; requires a zero constant term.
    pub fn exp(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.exp(self, n))
    }

    /// Square root modulo `x^n`.
    pub fn sqrt(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.sqrt(self, n))
    }

    /// `self^k` modulo `x^n`.
    pub fn pow(&self, k: u64, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.pow(self, k, n))
    }

    /// Sine modulo `x^n`; requires a zero constant term.
    pub fn sin(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.sin(self, n))
    }

    /// Cosine modulo `x^n`; requires a zero constant term.
    pub fn cos(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.cos(self, n))
    }

    /// Tangent modulo `x^n`; requires a zero constant term.
    pub fn tan(&self, n: usize) -> Result<Self, PolyError> {
        with_default_engine(|e| e.tan(self, n))
    }

    /// Polynomial product.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, PolyError> {
        with_default_engine(|e| e.multiply(self, rhs))
    }

    /// Quotient and remainder of polynomial division by `divisor`.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        with_default_engine(|e| e.div_rem(self, divisor))
    }

    /// Evaluate at every point in `points`.
    pub fn eval_many(&self, points: &[ModInt]) -> Result<Vec<ModInt>, PolyError> {
        with_default_engine(|e| e.eval_many(self, points))
    }
}

impl Deref for Series {
    type Target = [ModInt];

    fn deref(&self) -> &[ModInt] {
        &self.0
    }
}

impl DerefMut for Series {
    fn deref_mut(&mut self) -> &mut [ModInt] {
        &mut self.0
    }
}

impl From<Vec<ModInt>> for Series {
    fn from(coeffs: Vec<ModInt>) -> Self {
        Self(coeffs)
    }
}

impl FromIterator<ModInt> for Series {
    fn from_iter<I: IntoIterator<Item = ModInt>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Coefficient-wise combination, padding the shorter side with zeros.
fn zip_longest(a: &[ModInt], b: &[ModInt], op: fn(ModInt, ModInt) -> ModInt) -> Series {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(ModInt::ZERO);
            let y = b.get(i).copied().unwrap_or(ModInt::ZERO);
            op(x, y)
        })
        .collect()
}

impl Add for &Series {
    type Output = Series;

    fn add(self, rhs: &Series) -> Series {
        zip_longest(&self.0, &rhs.0, Add::add)
    }
}

impl Add for Series {
    type Output = Series;

    fn add(self, rhs: Series) -> Series {
        &self + &rhs
    }
}

impl Sub for &Series {
    type Output = Series;

    fn sub(self, rhs: &Series) -> Series {
        zip_longest(&self.0, &rhs.0, Sub::sub)
    }
}

impl Sub for Series {
    type Output = Series;

    fn sub(self, rhs: Series) -> Series {
        &self - &rhs
    }
}

impl Neg for &Series {
    type Output = Series;

    fn neg(self) -> Series {
        self.0.iter().map(|&c| -c).collect()
    }
}

impl Neg for Series {
    type Output = Series;

    fn neg(self) -> Series {
        -&self
    }
}

impl Mul<ModInt> for &Series {
    type Output = Series;

    fn mul(self, k: ModInt) -> Series {
        self.scale(k)
    }
}

impl Mul<ModInt> for Series {
    type Output = Series;

    fn mul(self, k: ModInt) -> Series {
        self.scale(k)
    }
}

/// Polynomial product.
///
/// # Panics
///
/// Panics if the product needs a transform longer than the modulus supports;
/// use [`Series::try_mul`] to get the error instead.
impl Mul for &Series {
    type Output = Series;

    fn mul(self, rhs: &Series) -> Series {
        match self.try_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("series product failed: {err}"),
        }
    }
}

impl Mul for Series {
    type Output = Series;

    fn mul(self, rhs: Series) -> Series {
        &self * &rhs
    }
}

/// Polynomial quotient.
///
/// # Panics
///
/// Panics on a zero leading coefficient; use [`Series::div_rem`] to get the
/// error instead.
impl Div for &Series {
    type Output = Series;

    fn div(self, rhs: &Series) -> Series {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("series division failed: {err}"),
        }
    }
}

impl Div for Series {
    type Output = Series;

    fn div(self, rhs: Series) -> Series {
        &self / &rhs
    }
}

/// Polynomial remainder.
///
/// # Panics
///
/// Panics on a zero leading coefficient; use [`Series::div_rem`] to get the
/// error instead.
impl Rem for &Series {
    type Output = Series;

    fn rem(self, rhs: &Series) -> Series {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("series division failed: {err}"),
        }
    }
}

impl Rem for Series {
    type Output = Series;

    fn rem(self, rhs: Series) -> Series {
        &self % &rhs
    }
}

impl AddAssign<&Series> for Series {
    fn add_assign(&mut self, rhs: &Series) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Series> for Series {
    fn sub_assign(&mut self, rhs: &Series) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Series> for Series {
    fn mul_assign(&mut self, rhs: &Series) {
        *self = &*self * rhs;
    }
}

impl Zero for Series {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }
}

impl One for Series {
    fn one() -> Self {
        Self(vec![ModInt::ONE])
    }
}
