//! Sliding window techniques for problems about contiguous runs of a sequence.
//!
//! Instead of recomputing each candidate subarray from scratch (`O(n * k)` or `O(n^2)`), a window
//! `[start, end]` moves along the input. Each step adds the element entering at `end` and, when
//! needed, removes elements leaving at `start`, so that every element is added and removed at
//! most once and the whole scan is `O(n)`.
//!
//! - Fixed size windows always hold exactly `k` elements: [`window_averages`], [`max_sum_window`].
//! - Dynamic windows grow until a constraint breaks and then shrink until it holds again:
//!   [`smallest_subarray_with_sum`], [`longest_run_with_k_distinct`] and the problems built on it.

mod dynamic_window;
mod fixed_window;

pub use dynamic_window::*;
pub use fixed_window::*;
