use std::hash::{BuildHasher, Hash, RandomState};

/// A strategy for mapping a key onto one of `slots` slots, given a [`BuildHasher`] to produce the
/// key's hash. Both hash tables are generic over this, so the same table can be compared under
/// different hash functions.
pub trait SlotIndex {
    /// Returns the slot for `key` in a table with `slots` slots, or None if `slots` is 0.
    fn slot_for<Q: Hash + ?Sized>(&self, key: &Q, slots: usize) -> Option<usize>;
}

/// The division method: `h(k) mod m`.
///
/// This works best when `m` isn't a power of two, because then the slot only depends on the low
/// bits of the hash. With a good hasher like [`RandomState`], this doesn't matter much.
#[derive(Debug, Clone, Default)]
pub struct DivisionMethod<B = RandomState> {
    hasher: B,
}

impl DivisionMethod {
    pub fn new() -> DivisionMethod {
        DivisionMethod {
            hasher: RandomState::new(),
        }
    }
}

impl<B: BuildHasher> DivisionMethod<B> {
    pub const fn with_hasher(hasher: B) -> DivisionMethod<B> {
        DivisionMethod {
            hasher,
        }
    }
}

impl<B: BuildHasher> SlotIndex for DivisionMethod<B> {
    fn slot_for<Q: Hash + ?Sized>(&self, key: &Q, slots: usize) -> Option<usize> {
        let hash = self.hasher.hash_one(key);
        hash.checked_rem(slots as u64).map(|i| i as usize)
    }
}

/// A variant of the division method: `(2 * h(k) + 1) mod m`.
///
/// With an even number of slots (which is all a doubling table ever has) this can only produce
/// odd slots, so half of the table is never an ideal slot. It is included to show how much the
/// choice of hash function affects the collision count.
#[derive(Debug, Clone, Default)]
pub struct MultiplyAddMethod<B = RandomState> {
    hasher: B,
}

impl MultiplyAddMethod {
    pub fn new() -> MultiplyAddMethod {
        MultiplyAddMethod {
            hasher: RandomState::new(),
        }
    }
}

impl<B: BuildHasher> MultiplyAddMethod<B> {
    pub const fn with_hasher(hasher: B) -> MultiplyAddMethod<B> {
        MultiplyAddMethod {
            hasher,
        }
    }
}

impl<B: BuildHasher> SlotIndex for MultiplyAddMethod<B> {
    fn slot_for<Q: Hash + ?Sized>(&self, key: &Q, slots: usize) -> Option<usize> {
        let hash = self.hasher.hash_one(key).wrapping_mul(2).wrapping_add(1);
        hash.checked_rem(slots as u64).map(|i| i as usize)
    }
}
