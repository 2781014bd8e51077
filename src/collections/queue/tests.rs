#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn check_queue<Q: Queue<i32>>(mut queue: Q) {
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.dequeue(), Some(1), "Queues should dequeue in order of enqueuing.");
    assert_eq!(queue.dequeue(), Some(2), "Queues should dequeue in order of enqueuing.");
    assert_eq!(queue.dequeue(), Some(3), "Queues should dequeue in order of enqueuing.");
    queue.enqueue(4);
    assert_eq!(queue.dequeue(), Some(4));
    assert!(queue.is_empty());

    assert_eq!(queue.dequeue(), None);
    assert_eq!(
        queue.try_dequeue(),
        Err(QueueUnderflow),
        "Dequeuing an empty queue should underflow."
    );
}

#[test]
fn test_queues() {
    check_queue(ArrayQueue::new(10));
    check_queue(LinkedQueue::new());
    check_queue(TwoStackQueue::new());
}

#[test]
fn test_array_queue_wraps() {
    let mut queue = ArrayQueue::new(3);
    for round in 0..5 {
        queue.enqueue(round * 2);
        queue.enqueue(round * 2 + 1);
        assert_eq!(queue.front(), Some(&(round * 2)));
        assert_eq!(queue.dequeue(), Some(round * 2), "Slots should be reused after wrapping.");
        assert_eq!(queue.dequeue(), Some(round * 2 + 1), "Slots should be reused after wrapping.");
    }
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
}

#[test]
fn test_array_queue_overflow() {
    let mut queue = ArrayQueue::new(2);
    queue.enqueue("a");
    queue.enqueue("b");
    assert!(queue.is_full());

    let Err(err) = queue.try_enqueue("c") else {
        panic!("A full queue should reject another item.");
    };
    assert_eq!(err.item, "c", "The rejected item should be returned.");
    assert_eq!(err.to_string(), "Queue overflow, all 2 slots are full!");
    assert_eq!(queue.len(), 2, "A rejected item shouldn't change the queue.");

    assert_panics!({ queue.enqueue("d") }, "enqueue should panic when the queue is full.");

    assert_eq!(queue.dequeue(), Some("a"));
    assert!(queue.try_enqueue("c").is_ok(), "Dequeuing should free a slot.");
    assert_eq!(format!("{queue:?}"), r#"ArrayQueue { contents: ["b", "c"], len: 2, cap: 2 }"#);

    let mut empty = ArrayQueue::new(0);
    assert!(empty.try_enqueue(1).is_err(), "A queue with no capacity is always full.");
    assert_eq!(empty.dequeue(), None);
}

#[test]
fn test_linked_queue_ends() {
    let mut queue: LinkedQueue<_> = (1..=3).collect();
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&3));
    queue.enqueue(4);
    assert_eq!(queue.back(), Some(&4));
    assert_eq!(queue.len(), 4);
}

#[test]
fn test_two_stack_queue_interleaved() {
    let mut queue = TwoStackQueue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Some(1));
    queue.enqueue(3);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dequeue(), Some(2), "Items in the outbox should leave before the inbox.");
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_array_queue_overflow_message() {
    // Items don't need to be Debug for enqueue to report an overflow.
    struct Opaque;

    let mut queue = ArrayQueue::new(1);
    queue.enqueue(Opaque);

    let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        queue.enqueue(Opaque)
    }));
    let message = payload.err().and_then(|p| p.downcast::<String>().ok());
    assert_eq!(
        message.as_deref().map(String::as_str),
        Some("Queue overflow, all 1 slots are full!"),
        "enqueue should panic with the overflow's message."
    );
    assert_eq!(queue.len(), 1);
}
