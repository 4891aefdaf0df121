#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_4x4() -> CscMatrix<f64> {
    // A =
    //[ 4.0  -3.0   7.0    ⋅ ]
    //[  ⋅    8.0  -1.0    ⋅ ]
    //[ 1.0    ⋅    2.0  -3.0]
    //[  ⋅   -1.0    ⋅    1.0]
    let Ap = vec![0, 2, 5, 8, 10];
    let Ai = vec![0, 2, 0, 1, 3, 0, 1, 2, 2, 3];
    let Ax = vec![4., 1., -3., 8., -1., 7., -1., 2., -3., 1.];
    CscMatrix::new(4, 4, Ap, Ai, Ax)
}

fn test_matrix_3x4() -> CscMatrix<f64> {
    // A =
    //[ 1.0    ⋅     ⋅   5.0]
    //[  ⋅     ⋅     ⋅   6.0]
    //[ 2.0   3.0    ⋅    ⋅ ]
    let Ap = vec![0, 2, 3, 3, 5];
    let Ai = vec![0, 2, 2, 0, 1];
    let Ax = vec![1., 2., 3., 5., 6.];
    CscMatrix::new(3, 4, Ap, Ai, Ax)
}

// value stored at (row, col), found by scanning the column slice
fn stored_value(A: &CscMatrix<f64>, row: usize, col: usize) -> Option<f64> {
    let first = A.colptr[col];
    let last = A.colptr[col + 1];
    A.rowval[first..last]
        .iter()
        .position(|&r| r == row)
        .map(|k| A.nzval[first + k])
}

#[test]
fn test_to_dense() {
    let A = test_matrix_4x4();
    let D = A.to_dense();

    assert_eq!(D.size(), (4, 4));
    assert_eq!(
        D.data(),
        &[
            4., 0., 1., 0., //
            -3., 8., 0., -1., //
            7., -1., 2., 0., //
            0., 0., -3., 1.
        ]
    );
}

#[test]
fn test_to_dense_agrees_with_stored_entries() {
    for A in [test_matrix_4x4(), test_matrix_3x4()] {
        let D = A.to_dense();
        assert_eq!(D.data().len(), A.m * A.n);

        for col in 0..A.n {
            for row in 0..A.m {
                match stored_value(&A, row, col) {
                    Some(v) => assert_eq!(D[(row, col)], v),
                    None => assert_eq!(D[(row, col)], 0.),
                }
            }
        }
    }
}

#[test]
fn test_to_dense_does_not_modify_input() {
    let A = test_matrix_3x4();
    let B = A.clone();
    let _ = A.to_dense();
    assert_eq!(A, B);
}

#[test]
fn test_is_equal_approx_tolerance() {
    let A = test_matrix_4x4();

    assert!(A.is_equal_approx(&A, 0.));

    let mut B = A.clone();
    B.nzval[4] += 0.5;
    assert!(A.is_equal_approx(&B, 0.5));
    assert!(!A.is_equal_approx(&B, 0.25));
    assert!(!A.is_equal_approx(&B, 0.));

    // symmetric in its arguments
    assert!(B.is_equal_approx(&A, 0.5));
    assert!(!B.is_equal_approx(&A, 0.25));
}

#[test]
fn test_is_equal_approx_structure() {
    let A = test_matrix_4x4();

    // same values, different row index in the first column
    let mut B = A.clone();
    B.rowval[1] = 3;
    assert!(!A.is_equal_approx(&B, 1e3));

    // different column count
    let B = test_matrix_3x4();
    let C = CscMatrix::<f64>::identity(3);
    assert!(!B.is_equal_approx(&C, 1e3));

    // row dimension is not compared
    let mut D = B.clone();
    D.m = 10;
    assert!(B.is_equal_approx(&D, 0.));
}

#[test]
fn test_is_equal_approx_nan() {
    let mut A = CscMatrix::<f64>::identity(2);
    A.nzval[1] = f64::NAN;
    assert!(!A.is_equal_approx(&A.clone(), f64::INFINITY));
}
