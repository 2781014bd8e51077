use std::borrow::Borrow;
use std::hash::Hash;
use std::ops::{AddAssign, SubAssign};

use crate::collections::hash::ChainingHashTable;

/// Returns the length of the shortest contiguous run of `arr` whose sum is at least `target`, or
/// 0 if there is none. The elements of `arr` must be positive, so that shrinking the window always
/// lowers its sum.
///
/// # Examples
/// ```
/// # use classic_algorithms::sliding_window::smallest_subarray_with_sum;
/// assert_eq!(smallest_subarray_with_sum(&[2, 1, 5, 2, 3, 2], 7), 2);
/// assert_eq!(smallest_subarray_with_sum(&[1, 1], 7), 0);
/// ```
pub fn smallest_subarray_with_sum<T>(arr: &[T], target: T) -> usize
where
    T: Copy + Ord + Default + AddAssign + SubAssign,
{
    let mut window_sum = T::default();
    let mut start = 0;
    let mut smallest: Option<usize> = None;

    for (end, x) in arr.iter().enumerate() {
        window_sum += *x;

        while start <= end && window_sum >= target {
            let len = end - start + 1;
            smallest = Some(smallest.map_or(len, |s| s.min(len)));
            window_sum -= arr[start];
            start += 1;
        }
    }

    smallest.unwrap_or(0)
}

/// Returns the length of the longest contiguous run of `items` containing no more than `k`
/// distinct values. Returns 0 if `k` is 0.
///
/// The window keeps a count of each value it holds. Whenever a new value pushes the number of
/// distinct values past `k`, values are dropped from the start until one of them reaches a count
/// of zero.
pub fn longest_run_with_k_distinct<T: Hash + Eq>(items: &[T], k: usize) -> usize {
    let mut counts: ChainingHashTable<&T, usize> = ChainingHashTable::new();
    let mut start = 0;
    let mut longest = 0;

    for (end, item) in items.iter().enumerate() {
        acquire(&mut counts, item);

        while counts.len() > k {
            release(&mut counts, &items[start]);
            start += 1;
        }

        longest = longest.max(end + 1 - start);
    }

    longest
}

/// Returns the length of the longest substring of `s` with no more than `k` distinct characters.
///
/// # Examples
/// ```
/// # use classic_algorithms::sliding_window::longest_substring_k_distinct;
/// assert_eq!(longest_substring_k_distinct("araaci", 2), 4);
/// assert_eq!(longest_substring_k_distinct("cbbebi", 3), 5);
/// ```
pub fn longest_substring_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    longest_run_with_k_distinct(&chars, k)
}

/// Given a row of trees, where `fruits[i]` is the type of fruit on tree `i`, returns the most
/// fruit that can be picked with two baskets. Picking starts at any tree and moves right, taking
/// one fruit from every tree, until a third type of fruit is reached.
///
/// That is the longest run with at most 2 distinct values.
pub fn fruits_into_baskets<T: Hash + Eq>(fruits: &[T]) -> usize {
    longest_run_with_k_distinct(fruits, 2)
}

/// Returns the length of the longest substring of `s` in which no character repeats.
pub fn longest_substring_without_repeats(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: ChainingHashTable<char, usize> = ChainingHashTable::new();
    let mut start = 0;
    let mut longest = 0;

    for (end, c) in chars.iter().enumerate() {
        // Only the new character can be repeated, so shrink until its earlier copy is gone.
        if acquire(&mut counts, *c) > 1 {
            while chars[start] != *c {
                release(&mut counts, &chars[start]);
                start += 1;
            }
            release(&mut counts, &chars[start]);
            start += 1;
        }

        longest = longest.max(end + 1 - start);
    }

    longest
}

/// Increments the count for `key`, starting it at one if it is new, and returns the new count.
fn acquire<K: Hash + Eq>(counts: &mut ChainingHashTable<K, usize>, key: K) -> usize {
    match counts.get_mut(&key) {
        Some(count) => {
            *count += 1;
            *count
        },
        None => {
            counts.insert(key, 1);
            1
        },
    }
}

/// Decrements the count for `key`, removing it from the table entirely once it reaches zero.
fn release<K, Q>(counts: &mut ChainingHashTable<K, usize>, key: &Q)
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    if let Some(count) = counts.get_mut(key) {
        *count -= 1;
        if *count == 0 {
            counts.remove(key);
        }
    }
}
