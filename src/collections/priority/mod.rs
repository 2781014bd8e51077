//! A module containing [`PriorityQueue`], a heap-backed priority queue, and its errors.
//!
//! A max-priority queue is the classic way to schedule jobs: the highest priority pending job is
//! taken with [`extract_max`](MaxPriorityQueue::extract_max), new jobs are added at any time with
//! [`insert`](PriorityQueue::insert) and a waiting job can be bumped up with
//! [`increase_key`](PriorityQueue::increase_key). Every one of these is `O(log n)`.

mod error;
mod priority_queue;
mod tests;

pub use error::*;
pub use priority_queue::*;
