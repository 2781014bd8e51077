//! Array-backed binary heaps, as free functions over slices.
//!
//! A heap is a complete binary tree stored level by level in an array, so that no pointers are
//! needed. For a node at index `i`:
//! - its left child is at `2i + 1`,
//! - its right child is at `2i + 2`,
//! - its parent is at `(i - 1) / 2`.
//!
//! Whether the root is the largest or smallest element is chosen by a [`HeapOrder`]. The same
//! functions serve both, with [`max_heapify`], [`build_min_heap`] etc. provided as shorthands.

mod heap;
mod order;

pub use heap::*;
pub use order::*;
