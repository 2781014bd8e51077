/// Sorts `arr` by growing a sorted prefix one element at a time, swapping each new element
/// backwards past every larger element before it.
///
/// Fast on small or nearly sorted input, since an element already in place costs one comparison.
///
/// # Examples
/// ```
/// # use classic_algorithms::sorting::insertion_sort;
/// let mut arr = [8, 7, 1, 5];
/// insertion_sort(&mut arr);
/// assert_eq!(arr, [1, 5, 7, 8]);
/// ```
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        for j in (1..=i).rev() {
            if arr[j - 1] <= arr[j] {
                break;
            }
            arr.swap(j - 1, j);
        }
    }
}

/// Sorts `arr` by growing a sorted prefix, as [`insertion_sort`] does, but shifts the larger
/// elements up by one and writes the new element into the gap once, instead of swapping it
/// through every position.
pub fn insertion_sort_shifting<T: Ord>(arr: &mut [T]) {
    for j in 1..arr.len() {
        let mut i = j;
        while i > 0 && arr[i - 1] > arr[j] {
            i -= 1;
        }
        // Shift arr[i..j] up one slot and move the key from j into i.
        arr[i..=j].rotate_right(1);
    }
}
