use derive_more::{Display, Error};

/// An item was requested from an empty stack.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Stack underflow!")]
pub struct StackUnderflow;
