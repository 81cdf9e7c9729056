//! Polynomial convolution.
//!
//! Routes to the NTT pipeline (pad, transform, pointwise multiply, inverse
//! transform) and falls back to schoolbook multiplication when one operand
//! is short.

use fpscalc_memory::ScratchArena;

use crate::error::NttError;
use crate::field::ModInt;
use crate::transform::{Transform, MAX_TRANSFORM_LEN};

/// Default operand length at or below which schoolbook multiplication is used.
pub const DEFAULT_NAIVE_THRESHOLD: usize = 16;

/// Smallest power of two that is at least `n`, checked against the modulus
/// capacity.
pub fn transform_len(n: usize) -> Result<usize, NttError> {
    match n.max(1).checked_next_power_of_two() {
        Some(limit) if limit <= MAX_TRANSFORM_LEN => Ok(limit),
        limit => Err(NttError::CapacityExceeded {
            requested: limit.unwrap_or(n),
            max: MAX_TRANSFORM_LEN,
        }),
    }
}

/// Schoolbook O(|a|·|b|) product.
#[must_use]
pub fn multiply_naive(a: &[ModInt], b: &[ModInt]) -> Vec<ModInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![ModInt::ZERO; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Convolution engine: a transform plus the scratch arena its buffers come from.
pub struct Convolver {
    transform: Transform,
    arena: ScratchArena<ModInt>,
    naive_threshold: usize,
}

impl Convolver {
    /// Create a convolver.
    ///
    /// `arena_capacity` pre-sizes the first scratch buffer, in scalars.
    #[must_use]
    pub fn new(naive_threshold: usize, arena_capacity: usize) -> Self {
        Self {
            transform: Transform::new(),
            arena: ScratchArena::with_capacity(arena_capacity),
            naive_threshold,
        }
    }

    /// The scratch arena shared by every operation on this convolver.
    #[must_use]
    pub fn arena(&self) -> &ScratchArena<ModInt> {
        &self.arena
    }

    /// The underlying transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Operand length at or below which schoolbook multiplication is used.
    #[must_use]
    pub fn naive_threshold(&self) -> usize {
        self.naive_threshold
    }

    /// Full product of `a` and `b`, of length `|a| + |b| - 1`.
    ///
    /// Either operand being empty yields an empty product.
    pub fn multiply(&self, a: &[ModInt], b: &[ModInt]) -> Result<Vec<ModInt>, NttError> {
        if a.is_empty() || b.is_empty() {
            return Ok(Vec::new());
        }
        if a.len().min(b.len()) <= self.naive_threshold {
            return Ok(multiply_naive(a, b));
        }

        let out_len = a.len() + b.len() - 1;
        let limit = transform_len(out_len)?;
        let mut ta = self.arena.acquire(limit);
        let mut tb = self.arena.acquire(limit);
        ta.load(a);
        tb.load(b);

        self.transform.forward(&mut ta)?;
        self.transform.forward(&mut tb)?;
        for (x, &y) in ta.iter_mut().zip(tb.iter()) {
            *x *= y;
        }
        self.transform.inverse(&mut ta)?;

        Ok(ta[..out_len].to_vec())
    }

    /// Square of `a`, with a single forward transform.
    pub fn square(&self, a: &[ModInt]) -> Result<Vec<ModInt>, NttError> {
        if a.is_empty() {
            return Ok(Vec::new());
        }
        if a.len() <= self.naive_threshold {
            return Ok(multiply_naive(a, a));
        }

        let out_len = 2 * a.len() - 1;
        let limit = transform_len(out_len)?;
        let mut ta = self.arena.acquire(limit);
        ta.load(a);

        self.transform.forward(&mut ta)?;
        for x in ta.iter_mut() {
            let v = *x;
            *x = v * v;
        }
        self.transform.inverse(&mut ta)?;

        Ok(ta[..out_len].to_vec())
    }
}

impl Default for Convolver {
    fn default() -> Self {
        Self::new(DEFAULT_NAIVE_THRESHOLD, 0)
    }
}
