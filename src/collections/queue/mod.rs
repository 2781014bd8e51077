//! FIFO queues, behind the shared [`Queue`] trait.
//!
//! - [`ArrayQueue`] is a bounded ring buffer, which rejects items once it is full.
//! - [`LinkedQueue`] is an unbounded
//!   [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).
//! - [`TwoStackQueue`] is built from two [`LinkedStack`](crate::collections::stack::LinkedStack)s,
//!   one for enqueuing and one, reversed, for dequeuing.

mod array_queue;
mod error;
mod linked_queue;
mod queue;
mod tests;
mod two_stack_queue;

pub use array_queue::*;
pub use error::*;
pub use linked_queue::*;
pub use queue::*;
pub use two_stack_queue::*;
