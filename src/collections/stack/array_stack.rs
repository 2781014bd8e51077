use std::fmt::{self, Debug, Formatter};

use super::Stack;

/// A stack stored in a growable array, with the top at the end.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* Amortized, the array doubles when it runs out of room rather than overflowing.
pub struct ArrayStack<T> {
    pub(crate) items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub const fn new() -> ArrayStack<T> {
        ArrayStack {
            items: Vec::new(),
        }
    }

    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            items: Vec::with_capacity(cap),
        }
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("items", &self.items)
            .finish()
    }
}
