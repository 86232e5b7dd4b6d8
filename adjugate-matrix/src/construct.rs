//! Matrix construction: create, zeros, from rows, identity

use adjugate_core::MatrixError;
use crate::types::Matrix;

/// Create a zero-filled `rows × columns` matrix.
///
/// Fails with `InvalidMatrix` if either dimension is not positive, and with
/// `AllocationFailure` if storage cannot be reserved. Storage is a single
/// buffer, so a failed call never leaves a partially built matrix behind.
pub fn create(rows: i64, columns: i64) -> Result<Matrix, MatrixError> {
    if rows <= 0 || columns <= 0 {
        return Err(MatrixError::invalid(format!(
            "create: dimensions must be positive, got {}×{}", rows, columns
        )));
    }
    let rows = usize::try_from(rows)
        .map_err(|_| MatrixError::allocation(format!("create: {} rows exceeds address space", rows)))?;
    let columns = usize::try_from(columns)
        .map_err(|_| MatrixError::allocation(format!("create: {} columns exceeds address space", columns)))?;
    Matrix::new(rows, columns)
}

impl Matrix {
    /// Zero-filled matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid(format!(
                "new: dimensions must be positive, got {}×{}", rows, cols
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            MatrixError::allocation(format!("new: {}×{} cells overflow", rows, cols))
        })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            MatrixError::allocation(format!("new: {}×{}: {}", rows, cols, e))
        })?;
        data.resize(len, 0.0);

        Ok(Matrix { rows, cols, data })
    }

    /// Wrap a row-major buffer
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid(format!(
                "from_shape_vec: dimensions must be positive, got {}×{}", rows, cols
            )));
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::invalid(format!(
                "from_shape_vec: shape {}×{} does not fit buffer of length {}",
                rows, cols, data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::invalid("from_rows: empty data"));
        }

        let n_rows = rows.len();
        let n_cols = rows[0].len();

        // Validate all rows have same length
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::invalid(format!(
                    "from_rows: row {} has {} columns, expected {}",
                    i, row.len(), n_cols
                )));
            }
        }

        Matrix::from_shape_vec((n_rows, n_cols), rows.into_iter().flatten().collect())
    }

    /// `n × n` identity
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Matrix::new(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_zero_filled() {
        let m = create(100, 100).unwrap();
        assert_eq!(m.shape(), (100, 100));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_create_validity_sweep() {
        let (mut rows, mut cols) = (-100i64, -200i64);
        while rows < 200 && cols < 100 {
            let result = create(rows, cols);
            if rows > 0 && cols > 0 {
                assert!(result.is_ok(), "{}×{} should succeed", rows, cols);
            } else {
                assert!(matches!(result, Err(MatrixError::InvalidMatrix(_))), "{}×{} should fail", rows, cols);
            }
            rows += 1;
            cols += 1;
        }
    }

    #[test]
    fn test_create_overflow_is_allocation_failure() {
        assert!(matches!(create(i64::MAX, i64::MAX), Err(MatrixError::AllocationFailure(_))));
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(1, 2)], 6.0);

        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::from_rows(vec![vec![]]).is_err());
        assert!(Matrix::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_from_shape_vec() {
        assert!(Matrix::from_shape_vec((2, 2), vec![1.0; 4]).is_ok());
        assert!(Matrix::from_shape_vec((2, 2), vec![1.0; 3]).is_err());
        assert!(Matrix::from_shape_vec((0, 2), vec![]).is_err());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
        assert!(Matrix::identity(0).is_err());
    }
}
