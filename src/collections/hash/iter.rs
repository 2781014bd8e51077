use std::iter::{Flatten, FusedIterator};
use std::slice;

use super::chaining::Bucket;
use super::probing::Slot;

/// An iterator over the entries of a [`ChainingHashTable`](super::ChainingHashTable), visiting
/// each chain in slot order.
pub struct ChainIter<'a, K, V> {
    pub(crate) inner: Flatten<slice::Iter<'a, Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next()?;
        self.len -= 1;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for ChainIter<'_, K, V> {}

impl<K, V> ExactSizeIterator for ChainIter<'_, K, V> {}

/// An iterator over the entries of a [`ProbingHashTable`](super::ProbingHashTable), in slot
/// order.
pub struct ProbeIter<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Slot<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for ProbeIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.by_ref().flatten().next()?;
        self.len -= 1;
        Some((k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for ProbeIter<'_, K, V> {}

impl<K, V> ExactSizeIterator for ProbeIter<'_, K, V> {}
