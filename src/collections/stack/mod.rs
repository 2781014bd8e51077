//! LIFO stacks, behind the shared [`Stack`] trait.
//!
//! Three implementations are provided, each built from a different structure:
//! - [`ArrayStack`], a growable array where the top is the last element.
//! - [`LinkedStack`], a [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) where
//!   the top is the head.
//! - [`QueueStack`], a single queue which is rotated on every pop (requires the `queue` feature).

mod array_stack;
mod error;
mod linked_stack;
#[cfg(feature = "queue")]
mod queue_stack;
mod stack;
mod tests;

pub use array_stack::*;
pub use error::*;
pub use linked_stack::*;
#[cfg(feature = "queue")]
#[cfg_attr(docsrs, doc(cfg(feature = "queue")))]
pub use queue_stack::*;
pub use stack::*;
