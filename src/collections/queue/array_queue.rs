use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::{Queue, QueueOverflow};
use crate::util::result::ResultExtension;

/// A queue with a fixed capacity, stored in a ring buffer.
///
/// The front of the queue is at `head` and the next free slot is `len` slots after it, wrapping
/// around to the start of the buffer. Dequeuing moves `head` forward, so the slots it leaves
/// behind are reused once the back of the queue wraps around to them.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `front` | `O(1)` |
pub struct ArrayQueue<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates a new, empty ArrayQueue which can hold at most `cap` items.
    pub fn new(cap: usize) -> ArrayQueue<T> {
        ArrayQueue {
            buf: (0..cap).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the maximum number of items the queue can hold.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Returns a reference to the item at the front of the queue, if there is one.
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Adds `item` to the back of the queue.
    ///
    /// # Errors
    /// Returns [`QueueOverflow`], holding `item`, if the queue is full.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::queue::ArrayQueue;
    /// let mut queue = ArrayQueue::new(1);
    /// assert!(queue.try_enqueue('a').is_ok());
    /// assert_eq!(queue.try_enqueue('b').unwrap_err().into_item(), 'b');
    /// ```
    pub fn try_enqueue(&mut self, item: T) -> Result<(), QueueOverflow<T>> {
        if self.is_full() {
            debug!(cap = self.cap(), "bounded queue is full, rejecting item");
            return Err(QueueOverflow {
                item,
                cap: self.cap(),
            });
        }

        let tail = (self.head + self.len) % self.cap();
        self.buf[tail] = Some(item);
        self.len += 1;
        Ok(())
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    /// Adds `item` to the back of the queue.
    ///
    /// # Panics
    /// Panics if the queue is full. See [`ArrayQueue::try_enqueue`] for a non-panicking version.
    #[track_caller]
    fn enqueue(&mut self, item: T) {
        self.try_enqueue(item).throw()
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.buf[self.head].take();
        self.head = (self.head + 1) % self.cap();
        self.len -= 1;
        item
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents: Vec<&T> = (0..self.len)
            .filter_map(|i| self.buf[(self.head + i) % self.cap()].as_ref())
            .collect();

        f.debug_struct("ArrayQueue")
            .field("contents", &contents)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
