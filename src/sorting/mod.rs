//! Comparison sorts over mutable slices, all sorting into ascending order in place.
//!
//! | Sort | Best | Average | Worst | Extra space | Stable |
//! |-|-|-|-|-|-|
//! | [`insertion_sort`] | `O(n)` | `O(n^2)` | `O(n^2)` | `O(1)` | Yes |
//! | [`merge_sort`] | `O(n log n)` | `O(n log n)` | `O(n log n)` | `O(n)` | Yes |
//! | [`quick_sort`] | `O(n log n)` | `O(n log n)` | `O(n^2)` | `O(log n)` | No |
//! | [`heap_sort`] | `O(n log n)` | `O(n log n)` | `O(n log n)` | `O(1)` | No |
//!
//! [`heap_sort`] lives with the rest of the heap routines and is re-exported here.

mod insertion_sort;
mod merge_sort;
mod quick_sort;

pub use insertion_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;

#[doc(inline)]
pub use crate::collections::heap::{heap_sort, heap_sort_reverse};
