use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A copyable pointer to a heap allocated [`Node`]. Nodes are allocated through [`Box`] so that
/// taking a node back moves its value off of the heap.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the allocation behind this pointer.
    ///
    /// # Safety
    /// The pointer must not be used again afterwards, by this or any copy of it.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: NodePtrs are only created by from_node, so the pointer came from a leaked Box.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must still be allocated and `'a` must not outlive it.
    pub const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be allocated and no other reference to its value may exist during `'a`.
    pub const unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be allocated.
    pub const unsafe fn prev(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).prev }
    }

    /// # Safety
    /// The node must still be allocated.
    pub const unsafe fn next(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The node must still be allocated.
    pub const unsafe fn set_prev(self, prev: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).prev = prev; }
    }

    /// # Safety
    /// The node must still be allocated.
    pub const unsafe fn set_next(self, next: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).next = next; }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
