use super::StackUnderflow;

/// A last in, first out collection. Items are pushed onto and popped from the top.
///
/// Applications include undo/redo history, back/forward navigation and depth-first traversals.
pub trait Stack<T> {
    /// Places `item` on the top of the stack.
    fn push(&mut self, item: T);

    /// Removes and returns the item on the top of the stack, if there is one.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the item on the top of the stack, if there is one.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the item on the top of the stack.
    ///
    /// # Errors
    /// Returns [`StackUnderflow`] if the stack is empty.
    fn try_pop(&mut self) -> Result<T, StackUnderflow> {
        self.pop().ok_or(StackUnderflow)
    }
}
