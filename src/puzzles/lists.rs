use std::hash::Hash;

use crate::collections::hash::ProbingHashTable;
use crate::collections::linked::SinglyLinkedList;

/// Removes every duplicate value from `list`, keeping the first occurrence of each.
///
/// # Time Complexity
/// `O(n)` expected, with a table of up to `n` seen values.
pub fn remove_dups<T: Hash + Eq + Clone>(list: &mut SinglyLinkedList<T>) {
    let mut seen: ProbingHashTable<T, ()> = ProbingHashTable::new();
    list.retain(|value| seen.insert(value.clone(), ()).is_none());
}

/// Removes every duplicate value from `list` without any extra buffer, keeping the first
/// occurrence of each.
///
/// For each node, the rest of the list is unlinked and then relinked one node at a time, leaving
/// out those equal to the current node's value.
///
/// # Time Complexity
/// `O(n^2)`, with `O(1)` extra space.
pub fn remove_dups_in_place<T: PartialEq>(list: &mut SinglyLinkedList<T>) {
    let mut removed = 0;
    let mut current = list.head.as_deref_mut();

    while let Some(node) = current {
        let mut remaining = node.next.take();
        let mut tail = &mut node.next;

        while let Some(mut runner) = remaining {
            remaining = runner.next.take();
            if runner.value == node.value {
                removed += 1;
            } else {
                tail = &mut tail.insert(runner).next;
            }
        }

        current = node.next.as_deref_mut();
    }

    list.len -= removed;
}
