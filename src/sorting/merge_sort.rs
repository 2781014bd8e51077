/// Sorts `arr` by splitting it in half, sorting each half recursively and merging the two sorted
/// halves. Equal elements keep their relative order.
///
/// # Time Complexity
/// `O(n log n)` comparisons in every case, with `O(n)` extra space for the merge buffers.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }

    let mid = arr.len().div_ceil(2);
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

/// Merges the sorted runs `arr[..mid]` and `arr[mid..]` into one sorted run. When either run is
/// exhausted, the rest of the other is copied over as is.
fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        // Taking from the left on ties keeps the sort stable.
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            _ => false,
        };

        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}
