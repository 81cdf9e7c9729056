//! LIFO scratch stack for transform temporaries.
//!
//! Every doubling step checks out one or two zero-filled buffers, transforms
//! them, and gives them back before returning. Buffers are handed out as
//! [`Scratch`] guards, so release happens on every exit path, including `?`
//! early returns. The arena tracks how many words are checked out (the
//! high-water mark) and verifies that guards are dropped in reverse order of
//! acquisition.

use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};

use crate::stats::{ArenaCounters, ArenaStats};

/// Number of released buffers kept for reuse.
const DEFAULT_MAX_CACHED: usize = 32;

/// Stack-disciplined scratch allocator.
///
/// Not `Sync`: one arena serves one strictly nested call tree.
pub struct ScratchArena<T> {
    free: RefCell<Vec<Vec<T>>>,
    mark: Cell<usize>,
    live: RefCell<Vec<u64>>,
    next_id: Cell<u64>,
    max_cached: usize,
    counters: ArenaCounters,
}

impl<T: Copy + Default> ScratchArena<T> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            free: RefCell::new(Vec::new()),
            mark: Cell::new(0),
            live: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            max_cached: DEFAULT_MAX_CACHED,
            counters: ArenaCounters::new(),
        }
    }

    /// Create an arena whose first buffer can hold `words` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        let arena = Self::new();
        if words > 0 {
            arena.free.borrow_mut().push(Vec::with_capacity(words));
        }
        arena
    }

    /// Check out a zero-filled buffer of `len` elements.
    ///
    /// The buffer goes back to the arena when the guard is dropped.
    pub fn acquire(&self, len: usize) -> Scratch<'_, T> {
        let cached = self.free.borrow_mut().pop();
        let mut buf = cached.unwrap_or_default();
        let reused = buf.capacity() >= len;
        if !reused {
            tracing::trace!(requested = len, had = buf.capacity(), "scratch buffer grows");
        }
        buf.clear();
        buf.resize(len, T::default());

        let words = self.mark.get() + len;
        self.mark.set(words);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().push(id);
        self.counters.record_acquire(reused);
        self.counters.observe_words(words);

        Scratch {
            arena: self,
            buf,
            len,
            id,
        }
    }

    fn release(&self, buf: Vec<T>, len: usize, id: u64) {
        {
            let mut live = self.live.borrow_mut();
            if live.last() == Some(&id) {
                live.pop();
            } else {
                self.counters.record_order_violation();
                tracing::error!(
                    expected = ?live.last(),
                    released = id,
                    "scratch buffer released out of LIFO order"
                );
                live.retain(|&other| other != id);
            }
        }
        self.mark.set(self.mark.get() - len);

        let mut free = self.free.borrow_mut();
        if free.len() < self.max_cached {
            free.push(buf);
        }
    }

    /// Number of elements currently checked out.
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.mark.get()
    }

    /// Number of guards currently alive.
    #[must_use]
    pub fn live_buffers(&self) -> usize {
        self.live.borrow().len()
    }

    /// Number of released buffers waiting for reuse.
    #[must_use]
    pub fn cached_buffers(&self) -> usize {
        self.free.borrow().len()
    }

    /// Get a snapshot of usage statistics.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        self.counters.snapshot()
    }

    /// Reset usage statistics.
    pub fn reset_stats(&self) {
        self.counters.reset();
    }

    /// Drop every cached buffer, returning their memory to the allocator.
    pub fn clear(&self) {
        self.free.borrow_mut().clear();
    }
}

impl<T: Copy + Default> Default for ScratchArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A scratch buffer checked out from a [`ScratchArena`].
pub struct Scratch<'a, T: Copy + Default> {
    arena: &'a ScratchArena<T>,
    buf: Vec<T>,
    len: usize,
    id: u64,
}

impl<T: Copy + Default> Scratch<'_, T> {
    /// Copy `src` into the front of the buffer and zero the rest.
    pub fn load(&mut self, src: &[T]) {
        let n = src.len().min(self.buf.len());
        self.buf[..n].copy_from_slice(&src[..n]);
        self.buf[n..].fill(T::default());
    }
}

impl<T: Copy + Default> Deref for Scratch<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.buf
    }
}

impl<T: Copy + Default> DerefMut for Scratch<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<T: Copy + Default> Drop for Scratch<'_, T> {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        self.arena.release(buf, self.len, self.id);
    }
}
