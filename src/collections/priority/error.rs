use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A key update would have moved an element away from the root, which
/// [`increase_key`](super::PriorityQueue::increase_key) doesn't allow.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("New key would move the element away from the root of the heap!")]
pub struct KeyDemotion;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum KeyUpdateError {
    IndexOutOfBounds(IndexOutOfBounds),
    KeyDemotion(KeyDemotion),
}
