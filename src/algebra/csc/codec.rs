#![allow(non_snake_case)]

//---------------------------------------------------------
// conversion of CSC data to dense form and approximate
// structural comparison of two CSC matrices
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT, Matrix};
use itertools::izip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Allocates a new dense, column major copy of this matrix.
    ///
    /// Entries are visited in storage order while the column index only
    /// ever moves forward, so the cost is O(nnz + n).  Empty columns are
    /// skipped without consuming an entry.
    ///
    /// The matrix is assumed to be well formed.  Duplicate entries are not
    /// summed; the one stored last wins.
    pub fn to_dense(&self) -> Matrix<T> {
        let mut D = Matrix::zeros((self.m, self.n));

        let mut col = 0;
        for (ptr, (&row, &val)) in self.rowval.iter().zip(self.nzval.iter()).enumerate() {
            // advance to the column that owns position ptr
            while self.colptr[col + 1] <= ptr {
                col += 1;
            }
            D[(row, col)] = val;
        }
        D
    }

    /// True if `self` and `B` have identical column pointers and row
    /// indices, and every pair of stored values differs by at most `tol`.
    ///
    /// This is stricter than equality of the dense forms: an explicitly
    /// stored zero and an absent entry compare unequal.  Row dimensions
    /// are not compared.  The comparison is absolute, and `tol = 0`
    /// requires exact agreement.
    pub fn is_equal_approx(&self, B: &CscMatrix<T>, tol: T) -> bool {
        // identical column pointers imply identical nnz, so the
        // stored positions below line up one to one
        if self.n != B.n || self.colptr != B.colptr {
            return false;
        }

        izip!(&self.rowval, &B.rowval, &self.nzval, &B.nzval)
            .all(|(ra, rb, &xa, &xb)| ra == rb && (xa - xb).abs() <= tol)
    }
}

#[test]
fn test_to_dense_empty_columns() {
    // A =
    //[ ⋅   ⋅   3.0  ⋅ ]
    //[1.0  ⋅    ⋅   ⋅ ]
    //[2.0  ⋅   4.0  ⋅ ]
    let A = CscMatrix::new(
        3,
        4,
        vec![0, 2, 2, 4, 4],
        vec![1, 2, 0, 2],
        vec![1., 2., 3., 4.],
    );

    let D = A.to_dense();
    assert_eq!(
        D.into_vec(),
        vec![0., 1., 2., 0., 0., 0., 3., 0., 4., 0., 0., 0.]
    );
}

#[test]
fn test_to_dense_zero_dimensions() {
    let A = CscMatrix::<f64>::spalloc(0, 3, 0);
    assert!(A.to_dense().data().is_empty());

    let A = CscMatrix::<f64>::spalloc(4, 0, 0);
    assert!(A.to_dense().data().is_empty());
}
