use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::node::{Link, Node, NodePtr};
use super::{IntoIter, Iter};

/// A list with links in both directions, so that both ends can be pushed to and popped from in
/// constant time and any node can unlink itself without knowing its predecessor in advance.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `search` | `O(n)` |
/// | `remove` | `O(n)` |
///
/// `remove` is linear only because the node has to be found first, unlinking it is `O(1)`.
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: head is owned by self, so it lives at least as long as the borrow of self.
        self.head.map(|head| unsafe { head.value() })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: head is owned by self and self is borrowed mutably.
        self.head.map(|head| unsafe { head.value_mut() })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail is owned by self, so it lives at least as long as the borrow of self.
        self.tail.map(|tail| unsafe { tail.value() })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: tail is owned by self and self is borrowed mutably.
        self.tail.map(|tail| unsafe { tail.value_mut() })
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            // SAFETY: head is owned by self and still allocated.
            Some(head) => unsafe { head.set_prev(Some(node)) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            // SAFETY: tail is owned by self and still allocated.
            Some(tail) => unsafe { tail.set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head is a node of this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: tail is a node of this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Detaches `node` from its neighbours, joining them to each other, and returns its value.
    ///
    /// # Safety
    /// `node` must be a node of this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: Upheld by the caller. The node is removed from the list below, so no other
        // pointer to it remains.
        let Node { value, prev, next } = unsafe { node.take_node() };

        match prev {
            // SAFETY: prev is a neighbouring node in this list.
            Some(prev) => unsafe { prev.set_next(next) },
            None => self.head = next,
        }
        match next {
            // SAFETY: next is a neighbouring node in this list.
            Some(next) => unsafe { next.set_prev(prev) },
            None => self.tail = prev,
        }

        self.len -= 1;
        value
    }

    /// Finds the first node whose value matches `pred`.
    pub(crate) fn find_node<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Link<T> {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from head is owned by self.
            unsafe {
                if pred(node.value()) {
                    return Some(node);
                }
                curr = node.next();
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from head is owned by self.
            unsafe {
                assert!(node.prev() == prev, "Each node should link back to its predecessor.");
                prev = Some(node);
                curr = node.next();
            }
            count += 1;
        }
        assert!(self.tail == prev, "The last node reached should be the tail.");
        assert_eq!(count, self.len, "The number of linked nodes should equal len.");
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns a reference to the first element equal to `item`.
    pub fn search(&self, item: &T) -> Option<&T> {
        // SAFETY: The node is owned by self, so it lives at least as long as the borrow of self.
        self.find_node(|value| value == item).map(|node| unsafe { node.value() })
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find_node(|value| value == item).is_some()
    }

    /// Removes the first element equal to `item`, returning it if it exists.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let node = self.find_node(|value| value == item)?;
        // SAFETY: find_node only returns nodes of this list.
        Some(unsafe { self.unlink(node) })
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: Each node is visited once and never again after being taken.
            let taken = unsafe { node.take_node() };
            curr = taken.next;
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}

// SAFETY: The list owns its nodes exclusively, as a Box<Node<T>> would.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access never mutates nodes.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
