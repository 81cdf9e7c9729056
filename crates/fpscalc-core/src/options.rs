//! Engine options.

use crate::constants::{DEFAULT_ARENA_CAPACITY, DEFAULT_NAIVE_THRESHOLD};

/// Options for a [`PolyEngine`](crate::engine::PolyEngine).
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Operand length at or below which products are computed schoolbook-style.
    pub naive_threshold: usize,
    /// Size of the first scratch buffer, in scalars.
    pub arena_capacity: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            naive_threshold: DEFAULT_NAIVE_THRESHOLD,
            arena_capacity: DEFAULT_ARENA_CAPACITY,
        }
    }
}

impl EngineOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.naive_threshold == 0 {
            self.naive_threshold = DEFAULT_NAIVE_THRESHOLD;
        }
        if self.arena_capacity == 0 {
            self.arena_capacity = DEFAULT_ARENA_CAPACITY;
        }
        self
    }
}
