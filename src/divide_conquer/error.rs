use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Two matrices had to be the same size, but weren't.
    #[display("Matrices of size {left} and {right} can't be combined!")]
    DimensionMismatch { left: usize, right: usize },
    /// Recursive multiplication only splits evenly into quadrants when the size is a power of two.
    #[display("Recursive multiplication requires a power of two size, got {size}!")]
    NotPowerOfTwo { size: usize },
    /// A row didn't have one element for every row of the matrix.
    #[display("Row {row} has {len} elements, but the matrix has {size} rows!")]
    NotSquare { row: usize, len: usize, size: usize },
}
