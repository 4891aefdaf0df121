#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Dense matrix with owned, column major storage.
///
/// This is the output type of [`CscMatrix::to_dense`](crate::algebra::CscMatrix::to_dense).
/// Element `(row, col)` lives at `data[col * m + row]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// m x n matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self {
            m,
            n,
            data: vec![T::zero(); m * n],
        }
    }

    /// Wraps column major data of length `m*n`
    ///
    /// # Panics
    /// Panics if the data length does not agree with the dimensions.
    pub fn from_column_major(size: (usize, usize), data: Vec<T>) -> Self {
        let (m, n) = size;
        assert_eq!(data.len(), m * n);
        Self { m, n, data }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning the flat column major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_dense_indexing() {
    // column major:
    // [1. 3.]
    // [2. 4.]
    let mut A = Matrix::from_column_major((2, 2), vec![1., 2., 3., 4.]);
    assert_eq!(A[(1, 0)], 2.);
    assert_eq!(A[(0, 1)], 3.);

    A[(1, 1)] = -4.;
    assert_eq!(A.data()[3], -4.);
    assert_eq!(A.size(), (2, 2));

    let Z = Matrix::<f64>::zeros((2, 3));
    assert_eq!(Z.into_vec(), vec![0.; 6]);
}
