#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

fn matrix(rows: Vec<Vec<i64>>) -> SquareMatrix<i64> {
    let Ok(matrix) = SquareMatrix::from_rows(rows) else {
        panic!("Test matrices should be square.");
    };
    matrix
}

#[test]
fn test_matrix_multiplication() {
    let a = matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = matrix(vec![vec![5, 6], vec![7, 8]]);
    let expected = matrix(vec![vec![19, 22], vec![43, 50]]);

    assert_eq!(a.multiply_recursive(&b), Ok(expected.clone()));
    assert_eq!(a.multiply_iterative(&b), Ok(expected));
}

#[test]
fn test_recursive_matches_iterative() {
    let a = matrix((0..4).map(|r| (0..4).map(|c| r * 4 + c).collect()).collect());
    let b = matrix((0..4).map(|r| (0..4).map(|c| (r + 1) * (c - 2)).collect()).collect());

    assert_eq!(
        a.multiply_recursive(&b),
        a.multiply_iterative(&b),
        "Every quadrant of a 4x4 product should be assembled in the right place."
    );
    assert_eq!(a.multiply_recursive(&SquareMatrix::identity(4)), Ok(a.clone()));

    let empty = SquareMatrix::<i64>::zeros(0);
    assert_eq!(
        empty.multiply_recursive(&empty),
        empty.multiply_iterative(&empty),
        "An empty product should be empty, whichever way it is computed."
    );
    assert_eq!(empty.multiply_recursive(&empty), Ok(SquareMatrix::zeros(0)));
}

#[test]
fn test_matrix_errors() {
    assert_eq!(
        SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]),
        Err(MatrixError::NotSquare { row: 1, len: 1, size: 2 }),
        "Ragged rows should be rejected."
    );
    assert!(SquareMatrix::from_rows(vec![vec![1, 2]]).is_err_and(|e| e.is_not_square()));

    let three = SquareMatrix::<i64>::identity(3);
    let two = SquareMatrix::<i64>::identity(2);
    assert_eq!(
        three.multiply_recursive(&three),
        Err(MatrixError::NotPowerOfTwo { size: 3 }),
        "Recursive multiplication should only accept powers of two."
    );
    assert_eq!(three.multiply_iterative(&three), Ok(three.clone()));
    assert!(two.add(&three).is_err_and(|e| e.is_dimension_mismatch()));
    assert_eq!(
        two.multiply_iterative(&three).map_err(|e| e.to_string()),
        Err(String::from("Matrices of size 2 and 3 can't be combined!"))
    );
}

#[test]
fn test_matrix_access() {
    let a = matrix(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(a.size(), 2);
    assert_eq!(a[(1, 0)], 3);
    assert_eq!(a.get(0, 1), Some(&2));
    assert_eq!(a.get(2, 0), None, "get should be bounds checked on each axis.");
    assert_eq!(a.get(0, 2), None, "get should be bounds checked on each axis.");
    assert_eq!(a.add(&a), Ok(matrix(vec![vec![2, 4], vec![6, 8]])));
    assert_eq!(format!("{a:?}"), "[[1, 2], [3, 4]]");

    assert_panics!({ a[(0, 2)] }, "Indexing past the last column should panic.");

    let zeros = SquareMatrix::<i64>::zeros(0);
    assert_eq!(zeros.rows().count(), 0);
}

#[test]
fn test_find_max_subarray() {
    let t1 = [-1, -1, 2, 3, 1, -2, -5];
    assert_eq!(find_maximum_subarray(&t1), Some(Subarray { low: 2, high: 4, sum: 6 }));
    assert_eq!(max_subarray_linear(&t1), Some(Subarray { low: 2, high: 4, sum: 6 }));

    assert_eq!(find_maximum_subarray::<i32>(&[]), None, "An empty slice has no subarray.");
    assert_eq!(max_subarray_linear::<i32>(&[]), None, "An empty slice has no subarray.");

    assert_eq!(
        find_maximum_subarray(&[-3, -1, -2]),
        Some(Subarray { low: 1, high: 1, sum: -1 }),
        "With only negative elements, the largest single element should be chosen."
    );
    assert_eq!(max_subarray_linear(&[-3, -1, -2]), Some(Subarray { low: 1, high: 1, sum: -1 }));
}

#[test]
fn test_crossing_subarray() {
    let arr = [5, -1, 1, 1];
    assert_eq!(
        find_max_crossing_subarray(&arr, 0, 1, 3),
        Subarray { low: 0, high: 3, sum: 6 },
        "The left scan should reach down to low."
    );
    assert_eq!(find_max_crossing_subarray(&arr, 1, 1, 2), Subarray { low: 1, high: 2, sum: 0 });

    assert_panics!({ find_max_crossing_subarray(&arr, 0, 3, 3) }, "mid must be before high.");
}

proptest! {
    #[test]
    fn maximum_subarray_strategies_agree(values in prop::collection::vec(-1000i64..1000, 1..100)) {
        let divided = find_maximum_subarray(&values);
        let linear = max_subarray_linear(&values);
        prop_assert_eq!(divided.map(|s| s.sum), linear.map(|s| s.sum));

        for found in divided.iter().chain(linear.iter()) {
            prop_assert_eq!(found.sum, values[found.low..=found.high].iter().sum::<i64>());
        }
    }
}
