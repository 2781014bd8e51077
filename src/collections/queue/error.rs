use std::error;
use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, Error};

/// An item was requested from an empty queue.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue underflow!")]
pub struct QueueUnderflow;

/// A bounded queue was full, so the item couldn't be enqueued. The rejected item is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueOverflow<T> {
    pub item: T,
    pub cap: usize,
}

impl<T> QueueOverflow<T> {
    /// Returns the item which couldn't be enqueued.
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for QueueOverflow<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue overflow, all {} slots are full!", self.cap)
    }
}

impl<T: Debug> error::Error for QueueOverflow<T> {}
