//! Scalars modulo the NTT-friendly prime `P = 998244353 = 119 * 2^23 + 1`.
//!
//! Every `ModInt` holds its canonical representative in `[0, P)`; all
//! constructors reduce and all operators stay closed over that range.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::NttError;

/// The prime modulus.
pub const MODULUS: u32 = 998_244_353;

/// Primitive root of the multiplicative group modulo [`MODULUS`].
pub const PRIMITIVE_ROOT: u32 = 3;

/// Largest `k` such that `2^k` divides `MODULUS - 1`.
pub const TWO_ADICITY: u32 = 23;

/// Odd part of `MODULUS - 1`.
const ODD_PART: u64 = ((MODULUS - 1) >> TWO_ADICITY) as u64;

/// A square root of `-1` modulo [`MODULUS`].
pub const IMAGINARY_UNIT: u32 = 86_583_718;

/// Element of the prime field `Z / 998244353 Z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct ModInt(u32);

impl ModInt {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(1);

    /// Construct from any unsigned value, reducing modulo `P`.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self((value % MODULUS as u64) as u32)
    }

    /// Construct from a signed value, mapping negatives into `[0, P)`.
    #[inline]
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self(value.rem_euclid(MODULUS as i64) as u32)
    }

    /// The canonical representative.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this is the zero representative.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Exponentiation by squaring.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem, or `None` for zero.
    #[must_use]
    pub fn checked_inv(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(u64::from(MODULUS - 2)))
        }
    }

    /// Multiplicative inverse, reporting zero as [`NttError::ZeroInverse`].
    pub fn try_inv(self) -> Result<Self, NttError> {
        self.checked_inv().ok_or(NttError::ZeroInverse)
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero. Use [`ModInt::checked_inv`] for
    /// caller-controlled values.
    #[must_use]
    pub fn inv(self) -> Self {
        assert!(!self.is_zero(), "division by zero representative");
        self.pow(u64::from(MODULUS - 2))
    }

    /// Euler's criterion: zero or a quadratic residue.
    #[must_use]
    pub fn is_square(self) -> bool {
        self.is_zero() || self.pow(u64::from((MODULUS - 1) / 2)) == Self::ONE
    }

    /// Square root by Tonelli–Shanks.
    ///
    /// Returns the smaller of the two roots, or `None` for a non-residue.
    #[must_use]
    pub fn sqrt(self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        if !self.is_square() {
            return None;
        }

        let mut m = TWO_ADICITY;
        let mut c = Self(PRIMITIVE_ROOT).pow(ODD_PART);
        let mut t = self.pow(ODD_PART);
        let mut r = self.pow(ODD_PART.div_ceil(2));

        while t != Self::ONE {
            let mut i = 0;
            let mut probe = t;
            while probe != Self::ONE {
                probe *= probe;
                i += 1;
            }
            let mut b = c;
            for _ in 0..(m - i - 1) {
                b *= b;
            }
            m = i;
            c = b * b;
            t *= c;
            r *= b;
        }

        Some(r.min(-r))
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ModInt {
    fn from(value: u32) -> Self {
        Self::new(u64::from(value))
    }
}

impl From<u64> for ModInt {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<usize> for ModInt {
    fn from(value: usize) -> Self {
        Self::new(value as u64)
    }
}

impl From<i64> for ModInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<ModInt> for u32 {
    fn from(value: ModInt) -> Self {
        value.0
    }
}

impl Add for ModInt {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let s = self.0 + rhs.0;
        Self(if s >= MODULUS { s - MODULUS } else { s })
    }
}

impl Sub for ModInt {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + MODULUS - rhs.0)
        }
    }
}

impl Mul for ModInt {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self((u64::from(self.0) * u64::from(rhs.0) % u64::from(MODULUS)) as u32)
    }
}

impl Div for ModInt {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl Neg for ModInt {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(MODULUS - self.0)
        }
    }
}

impl AddAssign for ModInt {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ModInt {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for ModInt {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for ModInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for ModInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for ModInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl Zero for ModInt {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for ModInt {
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reduction_on_construction() {
        assert_eq!(ModInt::new(u64::from(MODULUS)).value(), 0);
        assert_eq!(ModInt::new(u64::from(MODULUS) + 5).value(), 5);
        assert_eq!(ModInt::from_i64(-1).value(), MODULUS - 1);
        assert_eq!(ModInt::from(-(i64::from(MODULUS)) * 3).value(), 0);
    }

    #[test]
    fn add_sub_wrap() {
        let a = ModInt::new(u64::from(MODULUS - 1));
        assert_eq!(a + ModInt::new(2), ModInt::new(1));
        assert_eq!(ModInt::ZERO - ModInt::ONE, a);
        assert_eq!(-ModInt::ZERO, ModInt::ZERO);
        assert_eq!(-ModInt::ONE, a);
    }

    #[test]
    fn mul_large_operands() {
        let a = ModInt::new(u64::from(MODULUS - 1));
        assert_eq!(a * a, ModInt::ONE);
    }

    #[test]
    fn pow_and_inverse() {
        assert_eq!(ModInt::new(2).pow(10), ModInt::new(1024));
        assert_eq!(ModInt::new(5).pow(0), ModInt::ONE);
        let inv2 = ModInt::new(2).inv();
        assert_eq!(inv2.value(), 499_122_177);
        assert_eq!(ModInt::ZERO.checked_inv(), None);
        assert_eq!(ModInt::ZERO.try_inv(), Err(NttError::ZeroInverse));
    }

    #[test]
    #[should_panic(expected = "division by zero representative")]
    fn inverse_of_zero_panics() {
        let _ = ModInt::ZERO.inv();
    }

    #[test]
    fn primitive_root_has_full_order() {
        let g = ModInt::new(u64::from(PRIMITIVE_ROOT));
        assert_eq!(g.pow(u64::from(MODULUS - 1)), ModInt::ONE);
        assert_ne!(g.pow(u64::from((MODULUS - 1) / 2)), ModInt::ONE);
    }

    #[test]
    fn imaginary_unit_squares_to_minus_one() {
        let i = ModInt::new(u64::from(IMAGINARY_UNIT));
        assert_eq!(i * i, -ModInt::ONE);
    }

    #[test]
    fn sqrt_known_values() {
        assert_eq!(ModInt::new(4).sqrt(), Some(ModInt::new(2)));
        assert_eq!(ModInt::ONE.sqrt(), Some(ModInt::ONE));
        assert_eq!(ModInt::ZERO.sqrt(), Some(ModInt::ZERO));
        // 3 is a primitive root and therefore a non-residue.
        assert_eq!(ModInt::new(3).sqrt(), None);
        assert!(!ModInt::new(3).is_square());
    }

    #[test]
    fn sum_and_product() {
        let xs = [1u64, 2, 3, 4].map(ModInt::new);
        assert_eq!(xs.iter().copied().sum::<ModInt>(), ModInt::new(10));
        assert_eq!(xs.iter().copied().product::<ModInt>(), ModInt::new(24));
    }

    #[test]
    fn serde_reduces_on_input() {
        let x: ModInt = serde_json::from_str("-1").unwrap();
        assert_eq!(x.value(), MODULUS - 1);
        assert_eq!(serde_json::to_string(&ModInt::new(7)).unwrap(), "7");
    }

    proptest! {
        #[test]
        fn inverse_round_trip(v in 1u64..u64::from(MODULUS)) {
            let x = ModInt::new(v);
            prop_assert_eq!(x * x.inv(), ModInt::ONE);
        }

        #[test]
        fn sqrt_squares_back(v in 0u64..u64::from(MODULUS)) {
            let x = ModInt::new(v);
            let sq = x * x;
            let root = sq.sqrt().unwrap();
            prop_assert_eq!(root * root, sq);
            prop_assert!(root.value() <= MODULUS / 2);
        }
    }
}
