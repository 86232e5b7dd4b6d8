//! Core matrix type

use std::fmt;
use std::ops::{Index, IndexMut};
use adjugate_core::MatrixError;
use nalgebra::DMatrix;
use serde::{Serialize, Deserialize};

/// Dense row-major grid of f64 values.
///
/// A valid matrix has at least one row and one column and exactly
/// `rows * cols` cells of storage. `Matrix::default()` and a released matrix
/// are the zero-valued invalid matrix that every operation rejects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Positive dimensions backed by storage of the right size
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0 && self.rows.checked_mul(self.cols) == Some(self.data.len())
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if self.is_valid() && row < self.rows && col < self.cols {
            self.data.get(self.offset(row, col)).copied()
        } else {
            None
        }
    }

    /// Set element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if !self.is_valid() {
            return Err(MatrixError::invalid("set: matrix has no storage"));
        }
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::mismatch(format!(
                "set: index ({}, {}) out of bounds for {}×{}",
                row, col, self.rows, self.cols
            )));
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Get a row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows || !self.is_valid() {
            return None;
        }
        let start = self.offset(row, 0);
        Some(&self.data[start..start + self.cols])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert to nested rows
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        if !self.is_valid() {
            return Vec::new();
        }
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Free storage and reset to the zero-valued matrix. Calling it again is a no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Convert to nalgebra DMatrix
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        if !self.is_valid() {
            return DMatrix::zeros(0, 0);
        }
        DMatrix::from_row_slice(self.rows, self.cols, &self.data)
    }
}

impl From<&DMatrix<f64>> for Matrix {
    fn from(m: &DMatrix<f64>) -> Self {
        let (rows, cols) = m.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(m[(i, j)]);
            }
        }
        Matrix { rows, cols, data }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.0 < self.rows && index.1 < self.cols, "matrix index out of bounds");
        &self.data[self.offset(index.0, index.1)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.0 < self.rows && index.1 < self.cols, "matrix index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.to_nested().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let m = two_by_two();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.shape(), (2, 2));
        assert!(m.is_square());
        assert!(m.is_valid());
        assert_eq!(m.get(1, 1), Some(4.5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), Some(&[3.0, 4.5][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_indexed_write() {
        let mut m = Matrix::new(2, 3).unwrap();
        m[(1, 2)] = 7.0;
        m.set(0, 1, -1.0).unwrap();
        assert_eq!(m.as_slice(), &[0.0, -1.0, 0.0, 0.0, 0.0, 7.0]);
        assert!(matches!(m.set(2, 0, 1.0), Err(MatrixError::DimensionMismatch(_))));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut m = two_by_two();
        m.release();
        assert_eq!(m.shape(), (0, 0));
        assert!(!m.is_valid());
        assert!(m.as_slice().is_empty());

        m.release();
        assert_eq!(m, Matrix::default());
        assert!(matches!(m.set(0, 0, 1.0), Err(MatrixError::InvalidMatrix(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(two_by_two().to_string(), "[[1, 2], [3, 4.5]]");
        assert_eq!(Matrix::default().to_string(), "[]");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(two_by_two()).unwrap();
        assert_eq!(json["rows"], 2);
        assert_eq!(json["cols"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 4);

        let back: Matrix = serde_json::from_value(json).unwrap();
        assert_eq!(back, two_by_two());
    }

    #[test]
    fn test_deserialized_overflowing_shape_is_invalid() {
        let json = format!(r#"{{"rows": {}, "cols": 3, "data": []}}"#, usize::MAX);
        let m: Matrix = serde_json::from_str(&json).unwrap();
        assert!(!m.is_valid());
        assert!(matches!(crate::determinant(&m), Err(MatrixError::InvalidMatrix(_))));
        assert!(matches!(crate::transpose(&m), Err(MatrixError::InvalidMatrix(_))));
        assert_eq!(m.get(usize::MAX - 1, 2), None);
    }

    #[test]
    fn test_dmatrix_interop() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let d = m.to_dmatrix();
        assert_eq!(d.shape(), (2, 3));
        assert_eq!(d[(1, 0)], 4.0);
        assert_eq!(Matrix::from(&d), m);
    }
}
