//! # fpscalc-memory
//!
//! Memory management for the `fpscalc` workspace.
//!
//! Provides the LIFO scratch stack used by every transform and doubling step,
//! and a bump arena that holds subproduct-tree nodes for one evaluation pass.
#![warn(missing_docs)]

pub mod arena;
pub mod bump;
pub mod stats;

pub use arena::{Scratch, ScratchArena};
pub use bump::NodeArena;
pub use stats::ArenaStats;
