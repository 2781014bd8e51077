use std::ops::{Add, Sub};

/// Returns the average of every contiguous run of `k` elements of `arr`, in order. Returns an
/// empty Vec if `k` is 0 or longer than `arr`.
///
/// # Examples
/// ```
/// # use classic_algorithms::sliding_window::window_averages;
/// let averages = window_averages(&[1, 3, 2, 6, -1, 4, 1, 8, 2], 5);
/// assert_eq!(averages, [2.2, 2.8, 2.4, 3.6, 2.8]);
/// ```
pub fn window_averages<T: Copy + Into<f64>>(arr: &[T], k: usize) -> Vec<f64> {
    if k == 0 || k > arr.len() {
        return Vec::new();
    }

    let mut averages = Vec::with_capacity(arr.len() - k + 1);
    let mut window_sum = 0.0;

    for (end, x) in arr.iter().enumerate() {
        window_sum += (*x).into();

        if end + 1 >= k {
            averages.push(window_sum / k as f64);
            window_sum -= arr[end + 1 - k].into();
        }
    }

    averages
}

/// Returns the largest sum of any contiguous run of `k` elements of `arr`, or None if `k` is 0 or
/// longer than `arr`.
pub fn max_sum_window<T>(arr: &[T], k: usize) -> Option<T>
where
    T: Copy + Ord + Add<Output = T> + Sub<Output = T>,
{
    if k == 0 || k > arr.len() {
        return None;
    }

    let first = arr[1..k].iter().fold(arr[0], |sum, x| sum + *x);
    let mut window_sum = first;
    let mut max_sum = first;

    for end in k..arr.len() {
        window_sum = window_sum + arr[end] - arr[end - k];
        max_sum = max_sum.max(window_sum);
    }

    Some(max_sum)
}
