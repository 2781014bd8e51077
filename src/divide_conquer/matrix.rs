use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, Index, IndexMut, Mul};

use super::MatrixError;

/// An `n` by `n` matrix, stored row by row in a single [`Vec`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of rows (and columns) in the matrix.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `add` | `O(n^2)` |
/// | `multiply_iterative` | `O(n^3)` |
/// | `multiply_recursive` | `O(n^3)` |
#[derive(Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    pub(crate) size: usize,
    pub(crate) data: Vec<T>,
}

impl<T> SquareMatrix<T> {
    /// Creates a matrix from a list of rows, each of which must be as long as the list itself.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for the first row of the wrong length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<SquareMatrix<T>, MatrixError> {
        let size = rows.len();

        if let Some((row, len)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != size)
        {
            return Err(MatrixError::NotSquare { row, len, size });
        }

        Ok(SquareMatrix {
            size,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows, which is also the number of columns.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns a reference to the element at `row`, `col`, if both are in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns an iterator over each row of the matrix, as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on 0, which only an empty matrix would pass.
        self.data.chunks(self.size.max(1))
    }

    fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch { left: self.size, right: other.size })
        }
    }
}

impl<T: Copy + Default> SquareMatrix<T> {
    /// Creates a `size` by `size` matrix filled with `T::default()`.
    pub fn zeros(size: usize) -> SquareMatrix<T> {
        SquareMatrix {
            size,
            data: vec![T::default(); size * size],
        }
    }
}

impl<T: Copy + Default + From<u8>> SquareMatrix<T> {
    /// Creates the `size` by `size` identity matrix, with ones on the diagonal.
    pub fn identity(size: usize) -> SquareMatrix<T> {
        let mut matrix = SquareMatrix::zeros(size);
        for i in 0..size {
            matrix[(i, i)] = T::from(1);
        }
        matrix
    }
}

impl<T: Copy + Default + Add<Output = T> + Mul<Output = T>> SquareMatrix<T> {
    /// Adds two matrices of the same size elementwise.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn add(&self, other: &Self) -> Result<SquareMatrix<T>, MatrixError> {
        self.check_same_size(other)?;

        Ok(SquareMatrix {
            size: self.size,
            data: self.data.iter().zip(&other.data).map(|(a, b)| *a + *b).collect(),
        })
    }

    /// Multiplies `self` by `other` with the textbook triple loop: each element of the product is
    /// the dot product of a row of `self` with a column of `other`.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if the sizes differ.
    ///
    /// # Examples
    /// ```
    /// # use classic_algorithms::divide_conquer::SquareMatrix;
    /// let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    /// let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
    /// let c = a.multiply_iterative(&b)?;
    /// assert_eq!(c, SquareMatrix::from_rows(vec![vec![19, 22], vec![43, 50]])?);
    /// # Ok::<(), classic_algorithms::divide_conquer::MatrixError>(())
    /// ```
    pub fn multiply_iterative(&self, other: &Self) -> Result<SquareMatrix<T>, MatrixError> {
        self.check_same_size(other)?;

        let n = self.size;
        let mut product = SquareMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    product[(i, j)] = product[(i, j)] + self[(i, k)] * other[(k, j)];
                }
            }
        }
        Ok(product)
    }

    /// Multiplies `self` by `other` by splitting both into four `n/2` by `n/2` quadrants:
    ///
    /// ```text
    /// | C11 C12 |   | A11 A12 |   | B11 B12 |
    /// |         | = |         | * |         |
    /// | C21 C22 |   | A21 A22 |   | B21 B22 |
    /// ```
    ///
    /// where `Cij = Ai1 * B1j + Ai2 * B2j`. That is eight recursive products of half the size,
    /// each added into its quadrant of the result. Quadrants are addressed by their offsets, so
    /// no submatrices are copied.
    ///
    /// # Errors
    /// - [`MatrixError::DimensionMismatch`] if the sizes differ.
    /// - [`MatrixError::NotPowerOfTwo`] if the size can't be halved evenly all the way down to 1.
    ///   An empty matrix is the exception: its product is empty as well.
    pub fn multiply_recursive(&self, other: &Self) -> Result<SquareMatrix<T>, MatrixError> {
        self.check_same_size(other)?;
        if self.size == 0 {
            return Ok(SquareMatrix::zeros(0));
        }
        if !self.size.is_power_of_two() {
            return Err(MatrixError::NotPowerOfTwo { size: self.size });
        }

        let mut product = SquareMatrix::zeros(self.size);
        multiply_quadrant(self, other, &mut product, Quadrant::ORIGIN, self.size);
        Ok(product)
    }
}

/// The row and column offsets of the top left corner of each operand's block.
#[derive(Debug, Clone, Copy)]
struct Quadrant {
    a: (usize, usize),
    b: (usize, usize),
    c: (usize, usize),
}

impl Quadrant {
    const ORIGIN: Quadrant = Quadrant {
        a: (0, 0),
        b: (0, 0),
        c: (0, 0),
    };
}

/// Adds the product of the `n` by `n` blocks of `a` (at `at.a`) and `b` (at `at.b`) into the block
/// of `c` at `at.c`.
fn multiply_quadrant<T>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
    c: &mut SquareMatrix<T>,
    at: Quadrant,
    n: usize,
) where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    if n == 1 {
        c[at.c] = c[at.c] + a[at.a] * b[at.b];
        return;
    }

    let half = n / 2;
    // C(i, j) += A(i, k) * B(k, j) for each quadrant index i, j, k in {0, 1}.
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let quadrant = Quadrant {
                    a: (at.a.0 + i * half, at.a.1 + k * half),
                    b: (at.b.0 + k * half, at.b.1 + j * half),
                    c: (at.c.0 + i * half, at.c.1 + j * half),
                };
                multiply_quadrant(a, b, c, quadrant, half);
            }
        }
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for {0}x{0} matrix!",
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for {0}x{0} matrix!",
            self.size
        );
        &mut self.data[row * self.size + col]
    }
}

impl<T: Debug> Debug for SquareMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
