#![cfg(test)]

use super::*;

fn check_stack<S: Stack<i32>>(mut stack: S) {
    stack.push(7);
    stack.push(0);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3), "peek should return the most recent item.");
    assert_eq!(stack.pop(), Some(3), "Stacks should pop in reverse order of pushing.");
    assert_eq!(stack.pop(), Some(0), "Stacks should pop in reverse order of pushing.");
    assert_eq!(stack.pop(), Some(7), "Stacks should pop in reverse order of pushing.");

    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.try_pop(), Err(StackUnderflow), "Popping an empty stack should underflow.");
    assert_eq!(StackUnderflow.to_string(), "Stack underflow!");
}

#[test]
fn test_array_stack() {
    check_stack(ArrayStack::new());
    check_stack(ArrayStack::with_cap(1));
}

#[test]
fn test_linked_stack() {
    check_stack(LinkedStack::new());
}

#[cfg(feature = "queue")]
#[test]
fn test_queue_stack() {
    check_stack(QueueStack::new());

    let mut stack = QueueStack::new();
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.pop(), Some(4));
    stack.push(10);
    assert_eq!(stack.peek(), Some(&10));
    assert_eq!(
        (0..5).map_while(|_| stack.pop()).collect::<Vec<_>>(),
        [10, 3, 2, 1, 0],
        "Rotating the queue on each pop should preserve stack order."
    );
}

#[test]
fn test_interleaved() {
    let mut stack = LinkedStack::new();
    stack.push('a');
    stack.push('b');
    assert_eq!(stack.try_pop(), Ok('b'));
    stack.push('c');
    assert_eq!(stack.try_pop(), Ok('c'));
    assert_eq!(stack.try_pop(), Ok('a'));
    assert!(stack.try_pop().is_err());
}
