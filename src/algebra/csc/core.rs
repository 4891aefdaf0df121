#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in Compressed Sparse Column (CSC) format.
///
/// Column `j` owns the stored positions `colptr[j]..colptr[j+1]`, and
/// within that range `rowval` is strictly increasing.  The 2 x 3 matrix
/// ```text
/// A = [⋅   2.  ⋅ ]
///     [1.  ⋅  -1.]
/// ```
/// is stored as
///
/// ```
/// use qpkit::algebra::CscMatrix;
///
/// let A: CscMatrix<f64> = CscMatrix::new(
///     2,                 // m
///     3,                 // n
///     vec![0, 1, 2, 3],  // colptr
///     vec![1, 0, 1],     // rowval
///     vec![1., 2., -1.], // nzval
/// );
/// assert!(A.check_format().is_ok());
/// assert_eq!(A.nnz(), 3);
/// ```
///
/// Matrices are produced and owned by the caller.  Nothing in this crate
/// mutates a `CscMatrix` passed to it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// column pointer of length `n+1`, starting at 0 and ending at nnz
    pub colptr: Vec<usize>,
    /// row index of each stored entry
    pub rowval: Vec<usize>,
    /// value of each stored entry
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Wraps existing CSC data.
    ///
    /// # Panics
    /// Panics if the array lengths disagree with `n` or with each other.
    /// Row bounds and row ordering are not checked here; use
    /// [`check_format`](CscMatrix::check_format) for that.
    pub fn new(
        m: usize,
        n: usize,
        colptr: Vec<usize>,
        rowval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// m x n matrix with room for `nnz` entries.  All columns are empty
    /// except the last, which owns every slot, so with `nnz = 0` this is
    /// the zero matrix.
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }
        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_identity_and_spalloc() {
    let I = CscMatrix::<f64>::identity(4);
    assert_eq!(I.nnz(), 4);
    assert_eq!(I.colptr, vec![0, 1, 2, 3, 4]);
    assert!(I.check_format().is_ok());

    let Z = CscMatrix::<f64>::spalloc(3, 2, 0);
    assert_eq!(Z.size(), (3, 2));
    assert_eq!(Z.nnz(), 0);
    assert!(Z.check_format().is_ok());
}

#[test]
fn test_csc_check_format() {
    let A = CscMatrix::<f64>::identity(3);
    assert!(A.check_format().is_ok());

    // decreasing column pointer
    let mut B = A.clone();
    B.colptr = vec![0, 2, 1, 3];
    assert_eq!(B.check_format(), Err(SparseFormatError::BadColptr));

    // repeated row within a column
    let B = CscMatrix::new(3, 1, vec![0, 2], vec![1, 1], vec![1., 2.]);
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowOrdering));

    // row out of range
    let B = CscMatrix::new(2, 1, vec![0, 1], vec![2], vec![1.]);
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));

    // inconsistent lengths
    let mut B = A;
    B.nzval.pop();
    assert_eq!(
        B.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}
