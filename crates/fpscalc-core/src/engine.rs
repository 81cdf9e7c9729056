//! The series engine: a convolver, its scratch arena and the options they
//! were built from.
//!
//! Every operation that needs scratch space is a method on [`PolyEngine`], so
//! the arena is always an explicit receiver. The operators on
//! [`Series`](crate::Series) go through a per-thread default engine.

use fpscalc_memory::{ArenaStats, ScratchArena};
use fpscalc_ntt::{Convolver, ModInt};
use tracing::debug;

use crate::error::PolyError;
use crate::options::EngineOptions;
use crate::series::Series;

/// Owner of the scratch arena and transform state for series operations.
///
/// Not `Sync`: an engine serves one strictly nested call tree at a time.
pub struct PolyEngine {
    conv: Convolver,
    options: EngineOptions,
}

impl PolyEngine {
    /// Create an engine from normalized options.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let options = options.normalize();
        debug!(
            naive_threshold = options.naive_threshold,
            arena_capacity = options.arena_capacity,
            "creating series engine"
        );
        Self {
            conv: Convolver::new(options.naive_threshold, options.arena_capacity),
            options,
        }
    }

    /// Options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The scratch arena every doubling step draws from.
    #[must_use]
    pub fn arena(&self) -> &ScratchArena<ModInt> {
        self.conv.arena()
    }

    /// Scalars currently checked out of the arena.
    ///
    /// Zero whenever no operation is in progress.
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.conv.arena().high_water_mark()
    }

    /// Arena usage statistics.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        self.conv.arena().stats()
    }

    /// Number of bit-reversal tables built so far.
    #[must_use]
    pub fn cached_transform_lengths(&self) -> usize {
        self.conv.transform().cached_lengths()
    }

    pub(crate) fn convolver(&self) -> &Convolver {
        &self.conv
    }

    /// Full polynomial product.
    pub fn multiply(&self, a: &Series, b: &Series) -> Result<Series, PolyError> {
        debug!(op = "multiply", lhs = a.len(), rhs = b.len(), "series operation");
        Ok(Series::new(self.mul_slices(a, b)?))
    }

    pub(crate) fn mul_slices(&self, a: &[ModInt], b: &[ModInt]) -> Result<Vec<ModInt>, PolyError> {
        Ok(self.conv.multiply(a, b)?)
    }

    /// Product truncated (or zero-padded) to `n` coefficients.
    pub(crate) fn mul_truncated(
        &self,
        a: &[ModInt],
        b: &[ModInt],
        n: usize,
    ) -> Result<Vec<ModInt>, PolyError> {
        let a = &a[..a.len().min(n)];
        let b = &b[..b.len().min(n)];
        let mut out = self.mul_slices(a, b)?;
        out.resize(n, ModInt::ZERO);
        Ok(out)
    }
}

impl Default for PolyEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

thread_local! {
    static DEFAULT_ENGINE: PolyEngine = PolyEngine::default();
}

/// Run `f` with this thread's default engine, creating it on first use.
///
/// Calls may nest: the engine is only borrowed shared.
pub fn with_default_engine<R>(f: impl FnOnce(&PolyEngine) -> R) -> R {
    DEFAULT_ENGINE.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_restores_mark() {
        let engine = PolyEngine::new(EngineOptions {
            naive_threshold: 1,
            arena_capacity: 64,
        });
        let a = Series::from_i64s(&[1; 40]);
        let p = engine.multiply(&a, &a).unwrap();
        assert_eq!(p.len(), 79);
        assert_eq!(p[39], ModInt::new(40));
        assert_eq!(engine.high_water_mark(), 0);
        assert!(engine.stats().acquisitions >= 2);
    }

    #[test]
    fn options_are_normalized() {
        let engine = PolyEngine::new(EngineOptions {
            naive_threshold: 0,
            arena_capacity: 0,
        });
        assert_eq!(
            engine.options().naive_threshold,
            crate::constants::DEFAULT_NAIVE_THRESHOLD
        );
    }

    #[test]
    fn default_engine_nests() {
        let outer = with_default_engine(|e| {
            let inner = with_default_engine(|e2| std::ptr::eq(e, e2));
            assert!(inner);
            e.high_water_mark()
        });
        assert_eq!(outer, 0);
    }

    #[test]
    fn truncated_product_pads() {
        let engine = PolyEngine::default();
        let a = [ModInt::ONE, ModInt::ONE];
        let out = engine.mul_truncated(&a, &a, 5).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[1], ModInt::new(2));
        assert_eq!(out[4], ModInt::ZERO);
    }
}
