#![cfg(test)]

use super::*;
use crate::collections::heap::{MaxOrder, MinOrder, is_heap};
use crate::util::panic::assert_panics;

#[test]
fn test_insert() {
    let mut queue = MaxPriorityQueue::new();
    queue.insert(5);
    queue.insert(10);
    queue.insert(20);
    assert_eq!(
        queue.as_slice(),
        [20, 5, 10],
        "Each inserted key should swim up past smaller parents."
    );
}

#[test]
fn test_extract_max() {
    let mut queue = MaxPriorityQueue::new();
    for key in [5, 10, 200, 1000] {
        queue.insert(key);
    }
    assert_eq!(queue.extract_max(), Some(1000));
    assert_eq!(queue.len(), 3);
    assert!(is_heap::<_, MaxOrder>(queue.as_slice()), "Extracting should keep a valid heap.");
    assert_eq!(queue.into_sorted_vec(), [200, 10, 5]);
}

#[test]
fn test_increase_key() {
    let mut queue = MaxPriorityQueue::new();
    for key in [1, 2, 3, 4] {
        queue.insert(key);
    }

    queue.increase_key(3, 1000);
    assert_eq!(queue.maximum(), Some(&1000), "An increased key should swim up to the root.");
    assert!(is_heap::<_, MaxOrder>(queue.as_slice()));

    assert_eq!(
        queue.try_increase_key(0, 1),
        Err(KeyUpdateError::KeyDemotion(KeyDemotion)),
        "Decreasing a key in a max-queue should fail."
    );
    assert_eq!(queue.maximum(), Some(&1000), "A failed update should leave the queue unchanged.");

    let err = queue.try_increase_key(4, 2000);
    assert!(err.is_err_and(|e| e.is_index_out_of_bounds()));
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err(String::from("Index 4 out of bounds for collection with 4 elements!"))
    );

    assert_panics!({ queue.increase_key(1, 0) }, "increase_key should panic on a demotion.");
}

#[test]
fn test_maximum() {
    let mut queue = MaxPriorityQueue::new();
    for key in [1000, 3000, 2000, 2500] {
        queue.insert(key);
    }
    assert_eq!(queue.maximum(), Some(&3000));
}

#[test]
fn test_min_queue() {
    let mut queue: MinPriorityQueue<_> = [7, 3, 9, 1, 4].into_iter().collect();
    assert!(is_heap::<_, MinOrder>(queue.as_slice()));
    assert_eq!(queue.minimum(), Some(&1));

    queue.increase_key(2, 0);
    assert_eq!(queue.extract_min(), Some(0), "Increasing priority in a min-queue lowers the key.");
    assert_eq!(queue.into_sorted_vec(), [1, 3, 4, 7]);
}

#[test]
fn test_underflow() {
    let mut queue: MaxPriorityQueue<i32> = PriorityQueue::with_cap(4);
    assert_eq!(queue.extract(), None, "Extracting from an empty queue should return None.");
    assert_eq!(queue.top(), None);
    assert!(queue.is_empty());

    queue.insert(1);
    assert_eq!(queue.extract(), Some(1));
    assert_eq!(queue.extract(), None);
}
