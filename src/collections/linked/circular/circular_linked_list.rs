use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::Iter;

/// A singly linked list whose last node links back to the first, useful for round-robin
/// scheduling (e.g. the turn order of a multiplayer game).
///
/// Only a pointer to the last node is kept, since its successor is the head. This makes both
/// `push_front` and `push_back` constant time, and advancing the head by one (`rotate`) a single
/// pointer move.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `rotate` | `O(1)` |
/// | `next_turn` | `O(1)` |
/// | `search` | `O(n)` |
pub struct CircularLinkedList<T> {
    pub(crate) last: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: NonNull<Node<T>>,
}

impl<T> CircularLinkedList<T> {
    /// Creates a new CircularLinkedList with no elements.
    pub const fn new() -> CircularLinkedList<T> {
        CircularLinkedList {
            last: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the CircularLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the CircularLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the head of the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: last and its successor are owned by self.
        self.last.map(|last| unsafe { &(*last.as_ref().next.as_ptr()).value })
    }

    /// Returns a reference to the element which links back to the head, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: last is owned by self.
        self.last.map(|last| unsafe { &(*last.as_ptr()).value })
    }

    /// Inserts the provided element as the new head of the list.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::linked::CircularLinkedList;
    /// let mut list = CircularLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            next: NonNull::dangling(),
        })));

        // SAFETY: node was just allocated, and last (if present) is owned by self.
        unsafe {
            match self.last {
                // A single node links to itself.
                None => {
                    (*node.as_ptr()).next = node;
                    self.last = Some(node);
                },
                Some(last) => {
                    (*node.as_ptr()).next = (*last.as_ptr()).next;
                    (*last.as_ptr()).next = node;
                },
            }
        }
        self.len += 1;
    }

    /// Inserts the provided element just before the head, making it the last node.
    pub fn push_back(&mut self, value: T) {
        self.push_front(value);
        // The new head is one step behind the old head, so rotating makes it the last node.
        self.rotate();
    }

    /// Removes the head of the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let last = self.last?;

        // SAFETY: last and its successor are owned by self. The head is unlinked before being
        // taken, so no pointer to it remains.
        unsafe {
            let head = (*last.as_ptr()).next;
            if head == last {
                self.last = None;
            } else {
                (*last.as_ptr()).next = (*head.as_ptr()).next;
            }
            self.len -= 1;
            let node = Box::from_raw(head.as_ptr());
            Some(node.value)
        }
    }

    /// Advances the head by one node, so that the old head becomes the last node. Does nothing
    /// for an empty list.
    pub fn rotate(&mut self) {
        if let Some(last) = self.last {
            // SAFETY: last is owned by self.
            self.last = Some(unsafe { (*last.as_ptr()).next });
        }
    }

    /// Returns the element whose turn it is and rotates the list, so that repeated calls cycle
    /// through every element in order, forever.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::linked::CircularLinkedList;
    /// let mut players: CircularLinkedList<_> = ["ann", "bo"].into_iter().collect();
    /// assert_eq!(players.next_turn(), Some(&"ann"));
    /// assert_eq!(players.next_turn(), Some(&"bo"));
    /// assert_eq!(players.next_turn(), Some(&"ann"));
    /// ```
    pub fn next_turn(&mut self) -> Option<&T> {
        self.rotate();
        // After rotating, the node whose turn it was is now the last node.
        self.back()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over one lap of the list, starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the head node, if the list isn't empty.
    pub(crate) fn head(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: last is owned by self.
        self.last.map(|last| unsafe { (*last.as_ptr()).next })
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    /// Returns a reference to the first element equal to `item`, visiting each node at most once.
    pub fn search(&self, item: &T) -> Option<&T> {
        self.iter().find(|value| *value == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_some()
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularLinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: Debug> Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: The list owns its nodes exclusively, as a Box<Node<T>> would.
unsafe impl<T: Send> Send for CircularLinkedList<T> {}
// SAFETY: Shared access never mutates nodes.
unsafe impl<T: Sync> Sync for CircularLinkedList<T> {}
