//! Bump arena for subproduct-tree nodes.
//!
//! A subproduct tree is built bottom-up, read top-down once, and then thrown
//! away as a whole. Node coefficient slices therefore live in a bumpalo
//! arena that is freed in one step when the evaluation pass ends.

use bumpalo::Bump;

/// Bump arena holding node coefficient slices for one tree pass.
pub struct NodeArena {
    bump: Bump,
}

impl NodeArena {
    /// Create a new arena with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Copy `src` into the arena and return the arena-owned slice.
    pub fn alloc_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Allocate a default-filled slice of `len` elements.
    pub fn alloc_slice<T: Copy + Default>(&self, len: usize) -> &mut [T] {
        self.bump.alloc_slice_fill_default(len)
    }

    /// Reset the arena, deallocating all nodes at once.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Get the number of bytes currently allocated.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
