//! Matrix operations: elementwise arithmetic, scaling, matmul, transpose
//!
//! Every operation borrows its inputs and returns a freshly allocated result.

use adjugate_core::MatrixError;
use crate::types::Matrix;
use crate::helpers::*;

fn zip_with(a: &Matrix, b: &Matrix, func: &str, f: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
    check_both_valid(a, b, func)?;
    check_same_dims(a, b, func)?;

    let mut result = Matrix::new(a.rows(), a.cols())?;
    for ((out, &x), &y) in result.data.iter_mut().zip(&a.data).zip(&b.data) {
        *out = f(x, y);
    }
    Ok(result)
}

/// Cell-by-cell sum of two same-shaped matrices
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, "add", |x, y| x + y)
}

/// Cell-by-cell difference `a - b`
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, "subtract", |x, y| x - y)
}

/// Multiply every cell by `k`
pub fn scale(a: &Matrix, k: f64) -> Result<Matrix, MatrixError> {
    check_valid(a, "scale")?;

    let mut result = Matrix::new(a.rows(), a.cols())?;
    for (out, &x) in result.data.iter_mut().zip(&a.data) {
        *out = x * k;
    }
    Ok(result)
}

/// Matrix product `a × b`; requires `a.cols() == b.rows()`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_both_valid(a, b, "multiply")?;
    check_matmul_dims(a, b, "multiply")?;

    let mut result = Matrix::new(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for k in 0..b.rows() {
                sum += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    Ok(result)
}

/// `cols × rows` matrix with `result[j][i] = a[i][j]`
pub fn transpose(a: &Matrix) -> Result<Matrix, MatrixError> {
    check_valid(a, "transpose")?;

    let mut result = Matrix::new(a.cols(), a.rows())?;
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            result[(j, i)] = a[(i, j)];
        }
    }
    Ok(result)
}
