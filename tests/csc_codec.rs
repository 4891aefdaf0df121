#![allow(non_snake_case)]

use qpkit::algebra::*;

fn identity_3x3() -> CscMatrix<f64> {
    CscMatrix::new(
        3,                   // m
        3,                   // n
        vec![0, 1, 2, 3],    // colptr
        vec![0, 1, 2],       // rowval
        vec![1.0, 1.0, 1.0], // nzval
    )
}

fn test_matrix_5x4() -> CscMatrix<f64> {
    // A =
    //[  ⋅    ⋅   -1.0    ⋅ ]
    //[ 2.0   ⋅     ⋅     ⋅ ]
    //[  ⋅    ⋅    3.0    ⋅ ]
    //[  ⋅    ⋅     ⋅     ⋅ ]
    //[ 4.0   ⋅    5.0    ⋅ ]
    CscMatrix::new(
        5,
        4,
        vec![0, 2, 2, 5, 5],
        vec![1, 4, 0, 2, 4],
        vec![2., 4., -1., 3., 5.],
    )
}

fn is_stored(A: &CscMatrix<f64>, row: usize, col: usize) -> bool {
    A.rowval[A.colptr[col]..A.colptr[col + 1]].contains(&row)
}

#[test]
fn test_identity_to_dense() {
    let A = identity_3x3();
    assert_eq!(
        A.to_dense().into_vec(),
        vec![1., 0., 0., 0., 1., 0., 0., 0., 1.]
    );
    assert!(A.is_equal_approx(&A, 1e-9));
    assert_eq!(A, CscMatrix::identity(3));
}

#[test]
fn test_to_dense_zero_pattern() {
    let A = test_matrix_5x4();
    let D = A.to_dense();
    assert_eq!(D.data().len(), A.m * A.n);

    // every zero in the dense form is an absent entry
    let mut stored = 0;
    for col in 0..A.n {
        for row in 0..A.m {
            if D[(row, col)] == 0. {
                assert!(!is_stored(&A, row, col));
            } else {
                stored += 1;
            }
        }
    }
    assert_eq!(stored, A.nnz());
}

#[test]
fn test_to_dense_trailing_empty_columns() {
    let A = CscMatrix::new(2, 3, vec![0, 1, 1, 1], vec![1], vec![7.]);
    assert_eq!(A.to_dense().into_vec(), vec![0., 7., 0., 0., 0., 0.]);
}

#[test]
fn test_is_equal_approx_reflexive() {
    for A in [identity_3x3(), test_matrix_5x4(), CscMatrix::spalloc(3, 2, 0)] {
        assert!(A.is_equal_approx(&A, 0.));
    }
}

#[test]
fn test_is_equal_approx_boundary() {
    let A = test_matrix_5x4();

    // exactly representable perturbation of 0.25
    let mut B = A.clone();
    B.nzval[3] += 0.25;

    assert!(A.is_equal_approx(&B, 0.25));
    assert!(!A.is_equal_approx(&B, 0.125));
    assert!(!A.is_equal_approx(&B, 0.));
}

#[test]
fn test_is_equal_approx_stored_zero() {
    // identical dense forms, but B stores an explicit zero at (0,0)
    let A = CscMatrix::new(2, 2, vec![0, 1, 2], vec![1, 0], vec![1., 2.]);
    let B = CscMatrix::new(2, 2, vec![0, 2, 3], vec![0, 1, 0], vec![0., 1., 2.]);

    assert_eq!(A.to_dense(), B.to_dense());
    assert!(!A.is_equal_approx(&B, 1.0));
    assert!(!B.is_equal_approx(&A, 1.0));
}

#[test]
fn test_is_equal_approx_extra_entry_in_last_column() {
    let A = CscMatrix::new(3, 2, vec![0, 1, 2], vec![0, 1], vec![1., 1.]);
    let B = CscMatrix::new(3, 2, vec![0, 1, 3], vec![0, 1, 2], vec![1., 1., 1.]);

    assert!(!A.is_equal_approx(&B, 1e3));
    assert!(!B.is_equal_approx(&A, 1e3));
}

#[test]
fn test_concurrent_reads() {
    let A = test_matrix_5x4();
    let expected = A.to_dense();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(A.to_dense(), expected);
                assert!(A.is_equal_approx(&A, 0.));
            });
        }
    });
}
