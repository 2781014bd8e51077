use std::fmt::{self, Debug, Formatter};

use super::Stack;
use crate::collections::linked::SinglyLinkedList;

/// A stack stored in a [`SinglyLinkedList`], with the top at the head. Every operation is `O(1)`
/// and never reallocates.
pub struct LinkedStack<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            list: SinglyLinkedList::new(),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, item: T) {
        self.list.push_front(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("list", &self.list)
            .finish()
    }
}
