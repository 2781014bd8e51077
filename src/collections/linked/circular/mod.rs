//! A module containing [`CircularLinkedList`] and its borrowed iterator.

mod circular_linked_list;
mod iter;

pub use circular_linked_list::*;
pub use iter::*;
