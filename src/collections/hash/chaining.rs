use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::mem;

use tracing::{debug, trace};

use super::{ChainIter, DivisionMethod, GROWTH_FACTOR, LOAD_FACTOR, MIN_ALLOCATED_SLOTS, SlotIndex};
use crate::collections::linked::SinglyLinkedList;

/// A hash table which resolves collisions by separate chaining: every slot holds a
/// [`SinglyLinkedList`] of all the entries whose keys map to it.
///
/// New keys are added at the head of their chain. Inserting a key which is already present
/// replaces its value in place instead.
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
/// \* Each of these walks the chain for the key's slot, which is `O(n)` in the worst case where
/// every key collides.
///
/// \** If the table is half full, `insert` grows and rehashes every entry first, taking `O(n)`.
pub struct ChainingHashTable<K, V, S = DivisionMethod> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) collisions: usize,
    pub(crate) strategy: S,
}

pub(crate) type Bucket<K, V> = SinglyLinkedList<(K, V)>;

impl<K: Hash + Eq, V> ChainingHashTable<K, V> {
    /// Creates a new ChainingHashTable with 0 slots, using the [`DivisionMethod`]. Slots will be
    /// allocated on the first insertion.
    pub fn new() -> ChainingHashTable<K, V> {
        ChainingHashTable::with_strategy(DivisionMethod::new())
    }

    /// Creates a new ChainingHashTable with exactly `slots` slots, using the [`DivisionMethod`].
    pub fn with_slots(slots: usize) -> ChainingHashTable<K, V> {
        ChainingHashTable::with_slots_and_strategy(slots, DivisionMethod::new())
    }
}

impl<K: Hash + Eq, V, S: SlotIndex> ChainingHashTable<K, V, S> {
    /// Creates a new ChainingHashTable with 0 slots and the provided `strategy`.
    pub fn with_strategy(strategy: S) -> ChainingHashTable<K, V, S> {
        ChainingHashTable::with_slots_and_strategy(0, strategy)
    }

    /// Creates a new ChainingHashTable with exactly `slots` slots and the provided `strategy`.
    pub fn with_slots_and_strategy(slots: usize, strategy: S) -> ChainingHashTable<K, V, S> {
        ChainingHashTable {
            buckets: empty_buckets(slots),
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

    /// Returns the number of slots (chains) in the table.
    pub fn slots(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of new keys which were added to a chain that already had entries.
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// Inserts the provided `key`-`value` pair into the table, growing it if required. If the key
    /// was already associated with a value, that value is replaced and returned.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::collections::hash::ChainingHashTable;
    /// let mut table = ChainingHashTable::new();
    /// assert_eq!(table.insert("city", "Hamilton"), None);
    /// assert_eq!(table.insert("city", "Toronto"), Some("Hamilton"));
    /// assert_eq!(table.get("city"), Some(&"Toronto"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        if self.should_grow() {
            self.grow();
        }

        // UNREACHABLE: should_grow is always true for 0 slots, so there is at least one slot now.
        let Some(slot) = self.strategy.slot_for(&key, self.slots()) else {
            unreachable!("ChainingHashTable has no slots after growing!");
        };

        let bucket = &mut self.buckets[slot];
        if !bucket.is_empty() {
            self.collisions += 1;
            trace!(slot, chain_len = bucket.len(), "hash collision in chaining table");
        }
        bucket.push_front((key, value));
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
        let slot = self.strategy.slot_for(key, self.slots())?;
        self.buckets[slot]
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.strategy.slot_for(key, self.slots())?;
        self.buckets[slot]
            .find_mut(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry for `key` from its chain, returning the value if it existed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key` from its chain, returning it if it existed.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.strategy.slot_for(key, self.slots())?;
        let bucket = &mut self.buckets[slot];
        let index = bucket.position(|(k, _)| k.borrow() == key)?;
        let entry = bucket.try_remove_at(index).ok()?;
        self.len -= 1;
        Some(entry)
    }

    /// Removes every entry, keeping the current number of slots.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the table, chain by chain.
    pub fn iter(&self) -> ChainIter<'_, K, V> {
        ChainIter {
            inner: self.buckets.iter().flatten(),
            len: self.len,
        }
    }

    /// Determines whether the table has reached its load factor, meaning that it should grow
    /// before another key is added.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.buckets.len() * LOAD_FACTOR.0 / LOAD_FACTOR.1
    }

    /// Grows the table by the growth factor, moving every entry into its chain for the new slot
    /// count. Moved entries don't count as collisions.
    pub(crate) fn grow(&mut self) {
        let new_slots = cmp::max(self.slots() * GROWTH_FACTOR, MIN_ALLOCATED_SLOTS);
        debug!(from = self.slots(), to = new_slots, len = self.len, "growing chaining table");

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_slots));

        for entry in old_buckets.into_vec().into_iter().flatten() {
            if let Some(slot) = self.strategy.slot_for(&entry.0, new_slots) {
                self.buckets[slot].push_front(entry);
            }
        }
    }
}

fn empty_buckets<K, V>(slots: usize) -> Box<[Bucket<K, V>]> {
    (0..slots).map(|_| SinglyLinkedList::new()).collect()
}

impl<K: Hash + Eq, V> Default for ChainingHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainingHashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ChainingHashTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<K: Debug, V: Debug, S: Debug> Debug for ChainingHashTable<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainingHashTable")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("collisions", &self.collisions)
            .field("strategy", &self.strategy)
            .finish()
    }
}
