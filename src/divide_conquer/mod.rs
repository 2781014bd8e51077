//! Divide and conquer algorithms: square matrix multiplication and the maximum subarray problem.
//!
//! Both split their input in half (or into quadrants), solve the pieces recursively and combine
//! the results, and both come with a straightforward alternative to compare against:
//! [`SquareMatrix::multiply_iterative`] and [`max_subarray_linear`].

mod error;
mod matrix;
mod maximum_subarray;
mod tests;

pub use error::*;
pub use matrix::*;
pub use maximum_subarray::*;
