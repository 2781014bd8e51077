/// The ordering of a heap, which decides which of two elements belongs closer to the root.
pub trait HeapOrder {
    /// Returns true if `a` must be above `b` in the heap, meaning that `b` can't be `a`'s parent.
    /// Equal elements never precede each other.
    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool;
}

/// Larger elements are closer to the root: `heap[parent(i)] >= heap[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxOrder;

impl HeapOrder for MaxOrder {
    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smaller elements are closer to the root: `heap[parent(i)] <= heap[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinOrder;

impl HeapOrder for MinOrder {
    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
        a < b
    }
}
