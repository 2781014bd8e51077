//! Hash tables: [`ChainingHashTable`] and [`ProbingHashTable`], along with the [`SlotIndex`]
//! strategies used to turn a key into a slot.
//!
//! Both tables resolve hash collisions differently:
//! - Separate chaining keeps a linked list in each slot, holding every entry whose key maps there.
//! - Open addressing keeps at most one entry per slot, probing forward (wrapping at the end) to
//!   the next free slot when the ideal one is taken.
//!
//! Either way, a bad hash function means many collisions, and lookups degrade from `O(1)` towards
//! `O(n)`. Both tables count the collisions they see, which makes it easy to compare strategies.

mod chaining;
mod iter;
mod probing;
mod strategy;
mod tests;

pub use chaining::*;
pub use iter::*;
pub use probing::*;
pub use strategy::*;

/// The fraction of slots which may be filled before a table grows, as (numerator, denominator).
/// Growing at half full keeps chains short and guarantees that a probe always finds a free slot.
pub(crate) const LOAD_FACTOR: (usize, usize) = (1, 2);

pub(crate) const MIN_ALLOCATED_SLOTS: usize = 2;

pub(crate) const GROWTH_FACTOR: usize = 2;
