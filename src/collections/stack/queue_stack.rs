use std::fmt::{self, Debug, Formatter};

use super::Stack;
use crate::collections::queue::{LinkedQueue, Queue};

/// A stack built from a single FIFO queue.
///
/// Pushing enqueues as normal. To pop, every item except the newest is dequeued and enqueued
/// again, which brings the newest item to the front of the queue where it can be dequeued.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(n)` |
/// | `peek` | `O(1)` |
pub struct QueueStack<T> {
    pub(crate) queue: LinkedQueue<T>,
}

impl<T> QueueStack<T> {
    pub const fn new() -> QueueStack<T> {
        QueueStack {
            queue: LinkedQueue::new(),
        }
    }
}

impl<T> Stack<T> for QueueStack<T> {
    fn push(&mut self, item: T) {
        self.queue.enqueue(item);
    }

    fn pop(&mut self) -> Option<T> {
        for _ in 1..self.queue.len() {
            let item = self.queue.dequeue()?;
            self.queue.enqueue(item);
        }
        self.queue.dequeue()
    }

    /// Returns the most recently enqueued item, which sits at the back of the queue.
    fn peek(&self) -> Option<&T> {
        self.queue.back()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for QueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for QueueStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueStack")
            .field("queue", &self.queue)
            .finish()
    }
}
