use super::QueueUnderflow;

/// A first in, first out collection. Items are enqueued at the back and dequeued from the front.
pub trait Queue<T> {
    /// Adds `item` to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the item at the front of the queue, if there is one.
    fn dequeue(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Errors
    /// Returns [`QueueUnderflow`] if the queue is empty.
    fn try_dequeue(&mut self) -> Result<T, QueueUnderflow> {
        self.dequeue().ok_or(QueueUnderflow)
    }
}
