//! Memoized bit-reversal permutation tables, keyed by transform length.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::field::TWO_ADICITY;

/// Bit-reversal tables for every transform length used so far.
///
/// Tables are built lazily on first use of a length and shared read-only
/// afterwards.
pub struct BitReversalCache {
    cache: Mutex<HashMap<usize, Arc<[usize]>>>,
    max_entries: usize,
}

impl BitReversalCache {
    /// Create a new cache holding at most `max_entries` tables.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            max_entries: max_entries.max(1),
        }
    }

    /// Get the permutation for length `n`, building it if needed.
    ///
    /// `n` must be a power of two.
    pub fn get_or_build(&self, n: usize) -> Arc<[usize]> {
        debug_assert!(n.is_power_of_two());
        let mut cache = self.cache.lock();
        if let Some(table) = cache.get(&n) {
            return Arc::clone(table);
        }
        if cache.len() >= self.max_entries {
            cache.clear();
        }
        tracing::trace!(len = n, "building bit-reversal table");
        let table: Arc<[usize]> = build_table(n).into();
        cache.insert(n, Arc::clone(&table));
        table
    }

    /// Get the number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drop every cached table.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for BitReversalCache {
    /// One slot per transform length the modulus supports.
    fn default() -> Self {
        Self::new(TWO_ADICITY as usize + 1)
    }
}

fn build_table(n: usize) -> Vec<usize> {
    let mut rev = vec![0usize; n];
    let half = n >> 1;
    for i in 1..n {
        rev[i] = (rev[i >> 1] >> 1) | if i & 1 == 1 { half } else { 0 };
    }
    rev
}
