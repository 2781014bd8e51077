use std::fmt::{self, Debug, Formatter};

use super::Queue;
use crate::collections::linked::DoublyLinkedList;

/// An unbounded queue stored in a [`DoublyLinkedList`], enqueuing at the back and dequeuing from
/// the front, both in `O(1)`.
pub struct LinkedQueue<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            list: DoublyLinkedList::new(),
        }
    }

    /// Returns a reference to the item which will be dequeued next, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a reference to the most recently enqueued item, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.list.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LinkedQueue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("list", &self.list)
            .finish()
    }
}
