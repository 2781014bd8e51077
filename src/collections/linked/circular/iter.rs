use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::CircularLinkedList;
use super::circular_linked_list::Node;

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head(),
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

/// An iterator over a single lap of a [`CircularLinkedList`]. Use [`Iterator::cycle`] to keep
/// going around.
pub struct Iter<'a, T> {
    // The links never run out, so the number of nodes left in this lap decides when to stop.
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next?;
        self.remaining -= 1;
        // SAFETY: The list is borrowed for 'a, so its nodes stay allocated and unmodified.
        unsafe {
            self.next = Some((*node.as_ptr()).next);
            Some(&(*node.as_ptr()).value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
