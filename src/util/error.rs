use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index was used which doesn't refer to an element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

impl IndexOutOfBounds {
    /// Returns `Ok(index)` if `index` is less than `len`.
    pub const fn check(index: usize, len: usize) -> Result<usize, IndexOutOfBounds> {
        if index < len {
            Ok(index)
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }
}
