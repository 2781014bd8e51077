use super::{HeapOrder, MaxOrder, MinOrder};

pub(crate) const fn left(i: usize) -> usize {
    2 * i + 1
}

pub(crate) const fn right(i: usize) -> usize {
    2 * i + 2
}

pub(crate) const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Moves the element at `i` down the heap, swapping it with whichever child should precede it
/// under `O`, until neither child does. Both subtrees of `i` must already be heaps.
///
/// `heap` is the whole heap: anything outside of it (such as the sorted tail during a heap sort)
/// shouldn't be passed in. An out of bounds `i` does nothing.
///
/// # Time Complexity
/// `O(log n)`, one swap per level at most.
pub fn sift_down<T: Ord, O: HeapOrder>(heap: &mut [T], mut i: usize) {
    let len = heap.len();
    loop {
        let mut top = i;
        let (l, r) = (left(i), right(i));

        if l < len && O::precedes(&heap[l], &heap[top]) {
            top = l;
        }
        if r < len && O::precedes(&heap[r], &heap[top]) {
            top = r;
        }

        if top == i {
            break;
        }
        heap.swap(i, top);
        i = top;
    }
}

/// Moves the element at `i` up the heap, swapping it with its parent for as long as it should
/// precede the parent under `O`. The rest of the heap must already be valid.
///
/// # Panics
/// Panics if `i` is out of bounds for a non-root index.
///
/// # Time Complexity
/// `O(log n)`.
pub fn sift_up<T: Ord, O: HeapOrder>(heap: &mut [T], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if !O::precedes(&heap[i], &heap[p]) {
            break;
        }
        heap.swap(i, p);
        i = p;
    }
}

/// Rearranges `heap` into a heap under `O`, by sifting down every node which has children,
/// starting from the last one. Leaves are already heaps of size one.
///
/// # Time Complexity
/// `O(n)`: most nodes are near the bottom, where sifting is cheap.
pub fn build_heap<T: Ord, O: HeapOrder>(heap: &mut [T]) {
    for i in (0..heap.len() / 2).rev() {
        sift_down::<T, O>(heap, i);
    }
}

/// Returns true if no element of `heap` should precede its parent under `O`.
pub fn is_heap<T: Ord, O: HeapOrder>(heap: &[T]) -> bool {
    (1..heap.len()).all(|i| !O::precedes(&heap[i], &heap[parent(i)]))
}

/// Sifts the element at `i` down a max-heap.
pub fn max_heapify<T: Ord>(heap: &mut [T], i: usize) {
    sift_down::<T, MaxOrder>(heap, i);
}

/// Sifts the element at `i` down a min-heap.
pub fn min_heapify<T: Ord>(heap: &mut [T], i: usize) {
    sift_down::<T, MinOrder>(heap, i);
}

pub fn build_max_heap<T: Ord>(heap: &mut [T]) {
    build_heap::<T, MaxOrder>(heap);
}

pub fn build_min_heap<T: Ord>(heap: &mut [T]) {
    build_heap::<T, MinOrder>(heap);
}

/// Sorts `arr` so that it finishes in the reverse of `O`'s order: the root is repeatedly swapped
/// to the end of the shrinking heap, where it is in its final position.
fn sort_by_order<T: Ord, O: HeapOrder>(arr: &mut [T]) {
    build_heap::<T, O>(arr);
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        sift_down::<T, O>(&mut arr[..end], 0);
    }
}

/// Sorts `arr` in ascending order, in place, using a max-heap. Not stable.
///
/// # Examples
/// ```
/// # use classic_algorithms::collections::heap::heap_sort;
/// let mut arr = [7, 4, 3, 1, 2];
/// heap_sort(&mut arr);
/// assert_eq!(arr, [1, 2, 3, 4, 7]);
/// ```
///
/// # Time Complexity
/// `O(n log n)` in every case, with `O(1)` extra space.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    sort_by_order::<T, MaxOrder>(arr);
}

/// Sorts `arr` in descending order, in place, using a min-heap.
pub fn heap_sort_reverse<T: Ord>(arr: &mut [T]) {
    sort_by_order::<T, MinOrder>(arr);
}
