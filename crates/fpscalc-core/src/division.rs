//! Polynomial division with remainder by the reversal trick.

use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::series::Series;

impl PolyEngine {
    /// Quotient and remainder of `a / b`.
    ///
    /// The divisor's last coefficient must be nonzero. The remainder has
    /// exactly `|b| - 1` coefficients once `|a| >= |b|`; a shorter dividend
    /// gives quotient `[0]` and itself as remainder.
    pub fn div_rem(&self, a: &Series, b: &Series) -> Result<(Series, Series), PolyError> {
        debug!(op = "div_rem", lhs = a.len(), rhs = b.len(), "series operation");
        let (q, r) = self.div_rem_slices(a, b)?;
        Ok((Series::new(q), Series::new(r)))
    }

    pub(crate) fn div_rem_slices(
        &self,
        a: &[ModInt],
        b: &[ModInt],
    ) -> Result<(Vec<ModInt>, Vec<ModInt>), PolyError> {
        match b.last() {
            Some(lead) if !lead.is_zero() => {}
            _ => return Err(PolyError::ZeroLeadingCoefficient),
        }
        let n = a.len();
        let m = b.len();
        if n < m {
            return Ok((vec![ModInt::ZERO], a.to_vec()));
        }

        let q = self.quotient(a, b)?;
        let bq = self.mul_slices(b, &q)?;
        let r = a[..m - 1]
            .iter()
            .zip(&bq)
            .map(|(&x, &y)| x - y)
            .collect();
        Ok((q, r))
    }

    /// Remainder only, used by the subproduct tree.
    pub(crate) fn rem_slices(&self, a: &[ModInt], b: &[ModInt]) -> Result<Vec<ModInt>, PolyError> {
        Ok(self.div_rem_slices(a, b)?.1)
    }

    /// `rev(q) = rev(a) * rev(b)^-1 mod x^(n-m+1)`.
    fn quotient(&self, a: &[ModInt], b: &[ModInt]) -> Result<Vec<ModInt>, PolyError> {
        let qlen = a.len() - b.len() + 1;
        let ra: Vec<ModInt> = a.iter().rev().take(qlen).copied().collect();
        let rb: Vec<ModInt> = b.iter().rev().take(qlen).copied().collect();
        let mut rb_inv = vec![ModInt::ZERO; qlen];
        self.inverse_into(&rb, qlen, &mut rb_inv)?;
        let mut q = self.mul_truncated(&ra, &rb_inv, qlen)?;
        q.reverse();
        Ok(q)
    }
}
