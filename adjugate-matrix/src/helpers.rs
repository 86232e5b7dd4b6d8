//! Argument checks shared by the operations

use adjugate_core::MatrixError;
use crate::types::Matrix;

/// Check that a matrix is structurally valid
pub fn check_valid(m: &Matrix, func: &str) -> Result<(), MatrixError> {
    if !m.is_valid() {
        return Err(MatrixError::invalid(format!(
            "{}: {}×{} matrix with {} cells of storage",
            func, m.rows(), m.cols(), m.as_slice().len()
        )));
    }
    Ok(())
}

/// Check that both operands are valid
pub fn check_both_valid(a: &Matrix, b: &Matrix, func: &str) -> Result<(), MatrixError> {
    check_valid(a, func)?;
    check_valid(b, func)
}

/// Check that two matrices have compatible dimensions for multiplication
pub fn check_matmul_dims(a: &Matrix, b: &Matrix, func: &str) -> Result<(), MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::mismatch(format!(
            "{}: incompatible dimensions {}×{} and {}×{}",
            func, a.rows(), a.cols(), b.rows(), b.cols()
        )));
    }
    Ok(())
}

/// Check that two matrices have the same dimensions
pub fn check_same_dims(a: &Matrix, b: &Matrix, func: &str) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::mismatch(format!(
            "{}: matrices must have same dimensions: {}×{} vs {}×{}",
            func, a.rows(), a.cols(), b.rows(), b.cols()
        )));
    }
    Ok(())
}

/// Check that a matrix is square
pub fn check_square(m: &Matrix, func: &str) -> Result<(), MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::mismatch(format!(
            "{}: requires square matrix, got {}×{}", func, m.rows(), m.cols()
        )));
    }
    Ok(())
}
