//! Sine, cosine and tangent through `exp(i a)`, with `i^2 = -1` in the field.

use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::constants::IMAGINARY_UNIT;
use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::recursive::{check_precision, check_zero_constant};
use crate::series::Series;

impl PolyEngine {
    /// `(exp(i a), exp(-i a))` modulo `x^n`.
    fn unit_exponentials(
        &self,
        a: &Series,
        n: usize,
        op: &'static str,
    ) -> Result<(Vec<ModInt>, Vec<ModInt>), PolyError> {
        check_zero_constant(a, op)?;
        check_precision(n)?;
        let i = ModInt::from(IMAGINARY_UNIT);
        let ia: Vec<ModInt> = a.iter().take(n).map(|&c| c * i).collect();
        let mut e1 = vec![ModInt::ZERO; n];
        let mut e2 = vec![ModInt::ZERO; n];
        if n > 0 {
            self.exp_into(&ia, n, &mut e1)?;
            self.inverse_into(&e1, n, &mut e2)?;
        }
        Ok((e1, e2))
    }

    /// Sine modulo `x^n`; requires `a[0] == 0`.
    pub fn sin(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "sin", len = a.len(), precision = n, "series operation");
        let (e1, e2) = self.unit_exponentials(a, n, "sin")?;
        let k = (ModInt::new(2) * ModInt::from(IMAGINARY_UNIT)).inv();
        Ok(e1.iter().zip(&e2).map(|(&p, &q)| (p - q) * k).collect())
    }

    /// Cosine modulo `x^n`; requires `a[0] == 0`.
    pub fn cos(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "cos", len = a.len(), precision = n, "series operation");
        let (e1, e2) = self.unit_exponentials(a, n, "cos")?;
        let inv2 = ModInt::new(2).inv();
        Ok(e1.iter().zip(&e2).map(|(&p, &q)| (p + q) * inv2).collect())
    }

    /// Tangent modulo `x^n`; requires `a[0] == 0`.
    pub fn tan(&self, a: &Series, n: usize) -> Result<Series, PolyError> {
        debug!(op = "tan", len = a.len(), precision = n, "series operation");
        let sin = self.sin(a, n)?;
        let cos = self.cos(a, n)?;
        let cos_inv = self.inverse(&cos, n)?;
        Ok(Series::new(self.mul_truncated(&sin, &cos_inv, n)?))
    }
}
