use std::mem;

/// Sorts `arr` by partitioning it around its last element, then sorting both sides of the pivot.
///
/// Only the smaller side is sorted recursively, the larger one is handled by the loop, which
/// keeps the recursion depth to `O(log n)` even when partitions are unbalanced.
///
/// # Time Complexity
/// `O(n log n)` on average, but `O(n^2)` on already sorted input, where every partition puts the
/// pivot at one end.
///
/// # Examples
/// ```
/// # use classic_algorithms::sorting::quick_sort;
/// let mut arr = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
/// quick_sort(&mut arr);
/// assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn quick_sort<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        // Taking arr moves the whole borrow into the two halves, so either can replace it.
        let (left, right) = mem::take(&mut arr).split_at_mut(pivot);
        // The pivot itself, at right[0], is already in place.
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

/// Lomuto partition: uses the last element of `arr` as the pivot and rearranges `arr` so that
/// everything before the pivot is less than or equal to it and everything after is greater.
/// Returns the pivot's final index, or 0 for an empty slice.
///
/// # Examples
/// ```
/// # use classic_algorithms::sorting::partition;
/// let mut arr = [2, 8, 7, 1, 3, 5, 6, 4];
/// assert_eq!(partition(&mut arr), 3);
/// assert_eq!(arr, [2, 1, 3, 4, 7, 5, 6, 8]);
/// ```
pub fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let Some(last) = arr.len().checked_sub(1) else {
        return 0;
    };

    let mut boundary = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, last);
    boundary
}
