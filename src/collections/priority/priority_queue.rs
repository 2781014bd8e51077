use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::marker::PhantomData;

use super::{IndexOutOfBounds, KeyDemotion, KeyUpdateError};
use crate::collections::heap::{self, HeapOrder, MaxOrder, MinOrder};
use crate::util::result::ResultExtension;

/// A priority queue stored as a binary heap in a [`Vec`], where `O` decides whether the largest
/// ([`MaxOrder`]) or smallest ([`MinOrder`]) element is served first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `top` | `O(1)` |
/// | `insert` | `O(log n)`* |
/// | `extract` | `O(log n)` |
/// | `increase_key` | `O(log n)` |
/// | `into_sorted_vec` | `O(n log n)` |
///
/// \* Amortized, pushing may need to reallocate the underlying Vec.
pub struct PriorityQueue<T, O = MaxOrder> {
    pub(crate) heap: Vec<T>,
    pub(crate) _order: PhantomData<O>,
}

/// A [`PriorityQueue`] serving the largest element first.
pub type MaxPriorityQueue<T> = PriorityQueue<T, MaxOrder>;

/// A [`PriorityQueue`] serving the smallest element first.
pub type MinPriorityQueue<T> = PriorityQueue<T, MinOrder>;

impl<T: Ord, O: HeapOrder> PriorityQueue<T, O> {
    /// Creates a new, empty PriorityQueue.
    pub const fn new() -> PriorityQueue<T, O> {
        PriorityQueue {
            heap: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Creates a new, empty PriorityQueue with room for at least `cap` elements.
    pub fn with_cap(cap: usize) -> PriorityQueue<T, O> {
        PriorityQueue {
            heap: Vec::with_capacity(cap),
            _order: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the underlying heap, in array order.
    pub const fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Adds `item` to the queue, as a new leaf which then swims up towards the root until its
    /// parent precedes it.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::priority::MaxPriorityQueue;
    /// let mut queue = MaxPriorityQueue::new();
    /// queue.insert(5);
    /// queue.insert(10);
    /// queue.insert(20);
    /// assert_eq!(queue.as_slice(), [20, 5, 10]);
    /// ```
    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
        let last = self.heap.len() - 1;
        heap::sift_up::<T, O>(&mut self.heap, last);
    }

    /// Returns a reference to the element that would be extracted next, if there is one.
    pub fn top(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes and returns the element at the root. The last leaf takes its place and sinks back
    /// down. Returns None if the queue is empty (heap underflow).
    pub fn extract(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop();
        heap::sift_down::<T, O>(&mut self.heap, 0);
        top
    }

    /// Replaces the element at index `i` with `key` and swims it up to restore the heap.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds, or `key` would belong further from the root than the
    /// element it replaces.
    pub fn increase_key(&mut self, i: usize, key: T) {
        self.try_increase_key(i, key).throw()
    }

    /// Replaces the element at index `i` with `key` and swims it up to restore the heap. In a
    /// max-queue this means `key` has to be at least the current element, in a min-queue at most.
    ///
    /// # Errors
    /// - [`IndexOutOfBounds`] if `i` isn't an index into the heap.
    /// - [`KeyDemotion`] if the current element would precede `key`. The queue is left unchanged.
    pub fn try_increase_key(&mut self, i: usize, key: T) -> Result<(), KeyUpdateError> {
        let i = IndexOutOfBounds::check(i, self.heap.len())?;

        if O::precedes(&self.heap[i], &key) {
            return Err(KeyDemotion.into());
        }

        self.heap[i] = key;
        heap::sift_up::<T, O>(&mut self.heap, i);
        Ok(())
    }

    /// Consumes the queue, returning its elements in the order they would have been extracted.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        iter::from_fn(|| self.extract()).collect()
    }
}

impl<T: Ord> MaxPriorityQueue<T> {
    /// Returns the largest element.
    pub fn maximum(&self) -> Option<&T> {
        self.top()
    }

    /// Removes and returns the largest element.
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Returns the smallest element.
    pub fn minimum(&self) -> Option<&T> {
        self.top()
    }

    /// Removes and returns the smallest element.
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T: Ord, O: HeapOrder> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for PriorityQueue<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap: Vec<T> = iter.into_iter().collect();
        heap::build_heap::<T, O>(&mut heap);
        PriorityQueue {
            heap,
            _order: PhantomData,
        }
    }
}

impl<T: Clone, O> Clone for PriorityQueue<T, O> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: Debug, O> Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
