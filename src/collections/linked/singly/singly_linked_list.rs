use std::fmt::{self, Debug, Display, Formatter};

use super::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list which only keeps links to the next node, with all insertions happening at the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `search` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_at` | `O(i)` |
/// | `retain` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// for i in 1..=3 {
    ///     list.push_front(i);
    /// }
    /// assert_eq!(list.to_string(), "3->2->1->None");
    /// ```
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the index of the first element for which `pred` returns true.
    pub fn position<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.iter().position(pred)
    }

    /// Returns a reference to the first element for which `pred` returns true.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.iter().find(|value| pred(value))
    }

    /// Returns a mutable reference to the first element for which `pred` returns true.
    pub fn find_mut<P: FnMut(&T) -> bool>(&mut self, mut pred: P) -> Option<&mut T> {
        self.iter_mut().find(|value| pred(value))
    }

    /// Removes the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes the element at the provided `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;

        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(IndexOutOfBounds { index, len: self.len }),
            }
        }

        let mut node = link.take().ok_or(IndexOutOfBounds { index, len: self.len })?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    /// Keeps only the elements for which `keep` returns true, visiting them in order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut remaining = self.head.take();
        let mut tail = &mut self.head;

        while let Some(mut node) = remaining {
            remaining = node.next.take();
            if keep(&node.value) {
                tail = &mut tail.insert(node).next;
            } else {
                self.len -= 1;
            }
        }
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        // Dropped iteratively, see the Drop implementation.
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns a reference to the first element equal to `item`.
    pub fn search(&self, item: &T) -> Option<&T> {
        self.find(|value| value == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_some()
    }

    /// Removes the first element equal to `item`, returning it if it exists.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.position(|value| value == item)?;
        self.try_remove_at(index).ok()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head directly would recurse once per node.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    /// Collects the items into a list in the same order they were yielded.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = SinglyLinkedList::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}->")?;
        }
        write!(f, "None")
    }
}
