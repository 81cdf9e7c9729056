//! In-place radix-2 number-theoretic transform.

use crate::bitrev::BitReversalCache;
use crate::error::NttError;
use crate::field::{ModInt, MODULUS, PRIMITIVE_ROOT, TWO_ADICITY};

/// Largest transform length the modulus supports.
pub const MAX_TRANSFORM_LEN: usize = 1 << TWO_ADICITY;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to evaluations at the powers of a root of unity.
    Forward,
    /// Evaluations back to coefficients, including the `1/n` scaling.
    Inverse,
}

/// NTT engine owning the bit-reversal memo table.
#[derive(Default)]
pub struct Transform {
    bitrev: BitReversalCache,
}

impl Transform {
    /// Create a transform with an empty bit-reversal cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform `data` in place.
    ///
    /// `data.len()` must be a power of two no larger than [`MAX_TRANSFORM_LEN`].
    pub fn apply(&self, data: &mut [ModInt], direction: Direction) -> Result<(), NttError> {
        let n = data.len();
        check_len(n)?;
        if n == 1 {
            return Ok(());
        }

        // Bit-reversal permutation
        let rev = self.bitrev.get_or_build(n);
        for (i, &j) in rev.iter().enumerate() {
            if i < j {
                data.swap(i, j);
            }
        }

        // Iterative Cooley-Tukey butterflies over doubling block sizes
        let g = ModInt::from(PRIMITIVE_ROOT);
        let mut len = 2;
        while len <= n {
            let mut w_len = g.pow(u64::from(MODULUS - 1) / len as u64);
            if direction == Direction::Inverse {
                w_len = w_len.inv();
            }
            let half = len / 2;
            for block in data.chunks_exact_mut(len) {
                let (lo, hi) = block.split_at_mut(half);
                let mut w = ModInt::ONE;
                for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                    let x = *u;
                    let y = *v * w;
                    *u = x + y;
                    *v = x - y;
                    w *= w_len;
                }
            }
            len <<= 1;
        }

        if direction == Direction::Inverse {
            let inv_n = ModInt::from(n).inv();
            for x in data.iter_mut() {
                *x *= inv_n;
            }
        }
        Ok(())
    }

    /// Forward transform in place.
    pub fn forward(&self, data: &mut [ModInt]) -> Result<(), NttError> {
        self.apply(data, Direction::Forward)
    }

    /// Inverse transform in place.
    pub fn inverse(&self, data: &mut [ModInt]) -> Result<(), NttError> {
        self.apply(data, Direction::Inverse)
    }

    /// Number of bit-reversal tables built so far.
    #[must_use]
    pub fn cached_lengths(&self) -> usize {
        self.bitrev.len()
    }
}

fn check_len(n: usize) -> Result<(), NttError> {
    if !n.is_power_of_two() {
        return Err(NttError::NotPowerOfTwo(n));
    }
    if n > MAX_TRANSFORM_LEN {
        return Err(NttError::CapacityExceeded {
            requested: n,
            max: MAX_TRANSFORM_LEN,
        });
    }
    Ok(())
}
