use std::ops::Add;

/// A contiguous run `arr[low..=high]` and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subarray<T> {
    pub low: usize,
    pub high: usize,
    pub sum: T,
}

/// Finds the non-empty contiguous subarray of `arr` with the largest sum, by divide and conquer.
/// Returns None if `arr` is empty.
///
/// The best subarray either lies entirely in the left half, entirely in the right half, or
/// crosses the midpoint. The first two are found recursively, the last by
/// [`find_max_crossing_subarray`]. When sums tie, the left half wins, then the right half.
///
/// # Examples
/// ```
/// # use classic_algorithms::divide_conquer::{Subarray, find_maximum_subarray};
/// let best = find_maximum_subarray(&[-1, -1, 2, 3, 1, -2, -5]);
/// assert_eq!(best, Some(Subarray { low: 2, high: 4, sum: 6 }));
/// ```
///
/// # Time Complexity
/// `O(n log n)`: two half-size subproblems plus a linear crossing scan, per level.
pub fn find_maximum_subarray<T>(arr: &[T]) -> Option<Subarray<T>>
where
    T: Copy + Ord + Add<Output = T>,
{
    let high = arr.len().checked_sub(1)?;
    Some(max_subarray_between(arr, 0, high))
}

fn max_subarray_between<T>(arr: &[T], low: usize, high: usize) -> Subarray<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    if low == high {
        return Subarray { low, high, sum: arr[low] };
    }

    let mid = low + (high - low) / 2;
    let left = max_subarray_between(arr, low, mid);
    let right = max_subarray_between(arr, mid + 1, high);
    let cross = find_max_crossing_subarray(arr, low, mid, high);

    if left.sum >= right.sum && left.sum >= cross.sum {
        left
    } else if right.sum >= cross.sum {
        right
    } else {
        cross
    }
}

/// Finds the subarray of `arr[low..=high]` with the largest sum out of those which contain both
/// `arr[mid]` and `arr[mid + 1]`. It is made of the best run ending at `mid` (scanning left, down
/// to and including `low`) joined to the best run starting at `mid + 1` (scanning right).
///
/// # Panics
/// Panics unless `low <= mid < high < arr.len()`.
pub fn find_max_crossing_subarray<T>(arr: &[T], low: usize, mid: usize, high: usize) -> Subarray<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    assert!(
        low <= mid && mid < high && high < arr.len(),
        "Crossing subarray needs low <= mid < high < len, got {low}, {mid}, {high} and {}!",
        arr.len()
    );

    let (mut left_sum, mut max_left) = (arr[mid], mid);
    let mut sum = arr[mid];
    for i in (low..mid).rev() {
        sum = sum + arr[i];
        if sum > left_sum {
            (left_sum, max_left) = (sum, i);
        }
    }

    let (mut right_sum, mut max_right) = (arr[mid + 1], mid + 1);
    let mut sum = arr[mid + 1];
    for j in mid + 2..=high {
        sum = sum + arr[j];
        if sum > right_sum {
            (right_sum, max_right) = (sum, j);
        }
    }

    Subarray {
        low: max_left,
        high: max_right,
        sum: left_sum + right_sum,
    }
}

/// Finds the maximum subarray in one pass (Kadane's algorithm). A window is grown to the right,
/// and restarted at the current element whenever the window so far has a negative sum, since
/// dropping it can only help. Returns None if `arr` is empty.
///
/// Where several subarrays share the largest sum, the one ending first is returned.
///
/// # Time Complexity
/// `O(n)` with `O(1)` extra space.
pub fn max_subarray_linear<T>(arr: &[T]) -> Option<Subarray<T>>
where
    T: Copy + Ord + Add<Output = T>,
{
    let (&first, rest) = arr.split_first()?;

    let mut best = Subarray { low: 0, high: 0, sum: first };
    let (mut window_low, mut window_sum) = (0, first);

    for (offset, &x) in rest.iter().enumerate() {
        let i = offset + 1;
        // window_sum + x < x exactly when the window so far is negative.
        if window_sum + x < x {
            (window_low, window_sum) = (i, x);
        } else {
            window_sum = window_sum + x;
        }

        if window_sum > best.sum {
            best = Subarray { low: window_low, high: i, sum: window_sum };
        }
    }

    Some(best)
}
