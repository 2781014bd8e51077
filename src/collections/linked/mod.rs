//! Linked list types: [`SinglyLinkedList`], [`DoublyLinkedList`] and [`CircularLinkedList`].
//!
//! The singly linked list is built entirely from owned [`Box`]es. The doubly linked and circular
//! lists need more than one pointer to each node, so they manage their nodes through raw pointers
//! instead.

pub mod circular;
pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use circular::CircularLinkedList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
