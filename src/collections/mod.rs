//! Collection types: hash tables, heaps, linked lists and the stacks and queues built from them.
//!
//! # Purpose
//! These are written to learn the structures themselves, so each one keeps the textbook shape
//! (buckets of linked lists, an array-backed binary heap, a ring buffer) rather than deferring to
//! the standard library's collections for its core storage.

#[cfg(feature = "hash")]
#[cfg_attr(docsrs, doc(cfg(feature = "hash")))]
pub mod hash;
#[cfg(feature = "heap")]
#[cfg_attr(docsrs, doc(cfg(feature = "heap")))]
pub mod heap;
#[cfg(feature = "linked")]
#[cfg_attr(docsrs, doc(cfg(feature = "linked")))]
pub mod linked;
#[cfg(feature = "priority")]
#[cfg_attr(docsrs, doc(cfg(feature = "priority")))]
pub mod priority;
#[cfg(feature = "queue")]
#[cfg_attr(docsrs, doc(cfg(feature = "queue")))]
pub mod queue;
#[cfg(feature = "stack")]
#[cfg_attr(docsrs, doc(cfg(feature = "stack")))]
pub mod stack;
