use std::fmt::{self, Debug, Formatter};

use super::Queue;
use crate::collections::stack::{LinkedStack, Stack};

/// A queue built from two stacks. New items are pushed onto the inbox. When the outbox runs dry,
/// the whole inbox is popped onto it, which reverses it into dequeue order.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)`* |
///
/// \* Amortized, since each item is moved from the inbox to the outbox exactly once.
pub struct TwoStackQueue<T> {
    pub(crate) inbox: LinkedStack<T>,
    pub(crate) outbox: LinkedStack<T>,
}

impl<T> TwoStackQueue<T> {
    pub const fn new() -> TwoStackQueue<T> {
        TwoStackQueue {
            inbox: LinkedStack::new(),
            outbox: LinkedStack::new(),
        }
    }
}

impl<T> Queue<T> for TwoStackQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.inbox.push(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            while let Some(item) = self.inbox.pop() {
                self.outbox.push(item);
            }
        }
        self.outbox.pop()
    }

    fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoStackQueue")
            .field("inbox", &self.inbox)
            .field("outbox", &self.outbox)
            .finish()
    }
}
