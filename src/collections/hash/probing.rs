use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::mem;

use tracing::{debug, trace};

use super::{DivisionMethod, GROWTH_FACTOR, LOAD_FACTOR, MIN_ALLOCATED_SLOTS, ProbeIter, SlotIndex};
use crate::util::fmt::DebugRaw;

/// A hash table which resolves collisions by open addressing with linear probing: each slot holds
/// at most one entry, and a key whose ideal slot is taken goes in the next free slot, wrapping
/// around to slot 0 after the last one.
///
/// Every entry can be reached by probing forward from its ideal slot without crossing an empty
/// slot. Removal keeps this true by shifting later entries of the same cluster back into the gap,
/// rather than leaving a tombstone behind.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Each of these probes along the cluster containing the key's ideal slot, which is `O(n)` in
/// the worst case where every key collides.
///
/// \** If the table is half full, `insert` grows and rehashes every entry first, taking `O(n)`.
pub struct ProbingHashTable<K, V, S = DivisionMethod> {
    pub(crate) slots: Box<[Slot<K, V>]>,
    pub(crate) len: usize,
    pub(crate) collisions: usize,
    pub(crate) strategy: S,
}

pub(crate) type Slot<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V> ProbingHashTable<K, V> {
    /// Creates a new ProbingHashTable with 0 slots, using the [`DivisionMethod`]. Slots will be
    /// allocated on the first insertion.
    pub fn new() -> ProbingHashTable<K, V> {
        ProbingHashTable::with_strategy(DivisionMethod::new())
    }

    /// Creates a new ProbingHashTable with exactly `slots` slots, using the [`DivisionMethod`].
    pub fn with_slots(slots: usize) -> ProbingHashTable<K, V> {
        ProbingHashTable::with_slots_and_strategy(slots, DivisionMethod::new())
    }
}

impl<K: Hash + Eq, V, S: SlotIndex> ProbingHashTable<K, V, S> {
    /// Creates a new ProbingHashTable with 0 slots and the provided `strategy`.
    pub fn with_strategy(strategy: S) -> ProbingHashTable<K, V, S> {
        ProbingHashTable::with_slots_and_strategy(0, strategy)
    }

    /// Creates a new ProbingHashTable with exactly `slots` slots and the provided `strategy`.
    pub fn with_slots_and_strategy(slots: usize, strategy: S) -> ProbingHashTable<K, V, S> {
        ProbingHashTable {
            slots: empty_slots(slots),
            len: 0,
            collisions: 0,
            strategy,
        }
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table.
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of new keys whose ideal slot was already taken by another key.
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// Inserts the provided `key`-`value` pair into the table, growing it if required. If the key
    /// was already associated with a value, that value is replaced and returned.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::hash::ProbingHashTable;
    /// let mut table = ProbingHashTable::new();
    /// assert_eq!(table.insert("school", 1), None);
    /// assert_eq!(table.insert("school", 2), Some(1));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        if self.should_grow() {
            self.grow();
        }

        // UNREACHABLE: should_grow is always true for 0 slots and the load factor leaves at least
        // one empty slot, so probing finds somewhere for the key.
        let (Some(ideal), Some(index)) = (
            self.strategy.slot_for(&key, self.slots()),
            self.probe(&key),
        ) else {
            unreachable!("ProbingHashTable has no free slot after growing!");
        };

        if index != ideal {
            self.collisions += 1;
            trace!(ideal, index, "hash collision in probing table");
        }
        self.slots[index] = Some((key, value));
        self.len += 1;
        None
    }

    /// Returns a reference to the value associated with `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns the entry for `key` as a key-value pair, if there is one.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.probe(key)?;
        self.slots[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.probe(key)?;
        self.slots[index].as_mut().map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning the value if it existed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning it if it existed.
    ///
    /// Emptying a slot in the middle of a cluster would cut off every entry after it from its
    /// ideal slot. To avoid that, the rest of the cluster is scanned and each entry which is
    /// allowed to move back into the gap does so, leaving a new gap where it was.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut gap = self.probe(key)?;
        let removed = self.slots[gap].take()?;
        self.len -= 1;

        let cap = self.slots();
        let mut next = (gap + 1) % cap;

        // The load factor guarantees an empty slot, which ends the cluster.
        while let Some((next_key, _)) = &self.slots[next] {
            let ideal = self.strategy.slot_for(next_key, cap);

            // An entry can only move back into the gap if that doesn't put it before its ideal
            // slot, i.e. its ideal slot isn't cyclically within (gap, next].
            if ideal.is_some_and(|ideal| !cyclically_within(gap, ideal, next)) {
                self.slots[gap] = self.slots[next].take();
                gap = next;
            }

            next = (next + 1) % cap;
        }

        Some(removed)
    }

    /// Removes every entry, keeping the current number of slots.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the table, in slot order.
    pub fn iter(&self) -> ProbeIter<'_, K, V> {
        ProbeIter {
            inner: self.slots.iter(),
            len: self.len,
        }
    }

    /// Determines whether the table has reached its load factor, meaning that it should grow
    /// before another key is added.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.slots.len() * LOAD_FACTOR.0 / LOAD_FACTOR.1
    }

    /// Grows the table by the growth factor and reinserts every entry. Moved entries don't count
    /// as collisions.
    pub(crate) fn grow(&mut self) {
        let new_slots = cmp::max(self.slots() * GROWTH_FACTOR, MIN_ALLOCATED_SLOTS);
        debug!(from = self.slots(), to = new_slots, len = self.len, "growing probing table");

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_slots));

        for (key, value) in old_slots.into_vec().into_iter().flatten() {
            if let Some(index) = self.probe(&key) {
                self.slots[index] = Some((key, value));
            }
        }
    }

    /// Finds the slot for `key`: starting at its ideal slot, walk forward (wrapping at the end)
    /// until a slot is found which is either empty or holds an equal key. Returns None if the
    /// table has no slots, or every slot is full of other keys.
    pub(crate) fn probe<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cap = self.slots();
        let mut index = self.strategy.slot_for(key, cap)?;

        for _ in 0..cap {
            match &self.slots[index] {
                Some((existing, _)) if existing.borrow() != key => index = (index + 1) % cap,
                _ => return Some(index),
            }
        }

        None
    }
}

/// Returns true if `index` lies in the cyclic range `(start, end]`.
const fn cyclically_within(start: usize, index: usize, end: usize) -> bool {
    if start <= end {
        start < index && index <= end
    } else {
        start < index || index <= end
    }
}

fn empty_slots<K, V>(slots: usize) -> Box<[Slot<K, V>]> {
    (0..slots).map(|_| None).collect()
}

impl<K: Hash + Eq, V> Default for ProbingHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ProbingHashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ProbingHashTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<K: Debug, V: Debug, S: Debug> Debug for ProbingHashTable<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let slots: Vec<DebugRaw> = self.slots.iter()
            .map(|slot| DebugRaw(match slot {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            }))
            .collect();

        f.debug_struct("ProbingHashTable")
            .field("slots", &slots)
            .field("len", &self.len)
            .field("collisions", &self.collisions)
            .field("strategy", &self.strategy)
            .finish()
    }
}
