//! Scratch arena usage counters.

use std::cell::Cell;

/// Snapshot of scratch arena usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Number of scratch buffers handed out.
    pub acquisitions: u64,
    /// Number of acquisitions served by a recycled buffer.
    pub reuses: u64,
    /// Number of acquisitions that had to allocate fresh storage.
    pub grow_events: u64,
    /// Largest number of words simultaneously checked out.
    pub peak_words: usize,
    /// Number of releases that did not match LIFO order.
    pub order_violations: u64,
}

/// Interior-mutable counters backing [`ArenaStats`].
///
/// The arena is single-threaded, so plain `Cell`s are enough.
#[derive(Debug, Default)]
pub struct ArenaCounters {
    acquisitions: Cell<u64>,
    reuses: Cell<u64>,
    grow_events: Cell<u64>,
    peak_words: Cell<usize>,
    order_violations: Cell<u64>,
}

impl ArenaCounters {
    /// Create new zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of current counters.
    pub fn snapshot(&self) -> ArenaStats {
        ArenaStats {
            acquisitions: self.acquisitions.get(),
            reuses: self.reuses.get(),
            grow_events: self.grow_events.get(),
            peak_words: self.peak_words.get(),
            order_violations: self.order_violations.get(),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.acquisitions.set(0);
        self.reuses.set(0);
        self.grow_events.set(0);
        self.peak_words.set(0);
        self.order_violations.set(0);
    }

    /// Record one acquisition; `reused` tells whether a cached buffer served it.
    pub fn record_acquire(&self, reused: bool) {
        self.acquisitions.set(self.acquisitions.get() + 1);
        if reused {
            self.reuses.set(self.reuses.get() + 1);
        } else {
            self.grow_events.set(self.grow_events.get() + 1);
        }
    }

    /// Raise the peak if `words` exceeds it.
    pub fn observe_words(&self, words: usize) {
        if words > self.peak_words.get() {
            self.peak_words.set(words);
        }
    }

    /// Increment the out-of-order release counter.
    pub fn record_order_violation(&self) {
        self.order_violations.set(self.order_violations.get() + 1);
    }
}
