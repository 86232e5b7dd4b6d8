//! Matrix properties: tolerance equality, minors, determinant, trace

use adjugate_core::{EngineConfig, MatrixError};
use crate::types::Matrix;
use crate::helpers::*;

/// Cellwise equality within `EPS`.
///
/// False if either matrix is invalid or their shapes differ. A cell only
/// counts as different when its gap exceeds the tolerance, so NaN and
/// infinite cells compare equal to themselves.
pub fn equals(a: &Matrix, b: &Matrix) -> bool {
    equals_with(a, b, &EngineConfig::default())
}

/// Cellwise equality within `config.eps`
pub fn equals_with(a: &Matrix, b: &Matrix, config: &EngineConfig) -> bool {
    if !a.is_valid() || !b.is_valid() || a.shape() != b.shape() {
        return false;
    }
    a.data.iter().zip(&b.data).all(|(x, y)| !((x - y).abs() > config.eps))
}

/// Copy of `a` without `exclude_row` and `exclude_col`, keeping relative order.
///
/// Callers guarantee `a` is valid with at least two rows and two columns.
pub(crate) fn minor(a: &Matrix, exclude_row: usize, exclude_col: usize) -> Result<Matrix, MatrixError> {
    let mut result = Matrix::new(a.rows() - 1, a.cols() - 1)?;
    for (n, i) in (0..a.rows()).filter(|&i| i != exclude_row).enumerate() {
        for (m, j) in (0..a.cols()).filter(|&j| j != exclude_col).enumerate() {
            result[(n, m)] = a[(i, j)];
        }
    }
    Ok(result)
}

/// Determinant by cofactor expansion along the first column.
///
/// Work grows factorially with the order; intended for small matrices.
pub fn determinant(a: &Matrix) -> Result<f64, MatrixError> {
    determinant_with(a, &EngineConfig::default())
}

pub fn determinant_with(a: &Matrix, config: &EngineConfig) -> Result<f64, MatrixError> {
    check_valid(a, "determinant")?;
    check_square(a, "determinant")?;

    let order = a.rows();
    if order > config.expansion_warn_order {
        tracing::warn!(order, limit = config.expansion_warn_order, "cofactor expansion on a large matrix");
    }
    tracing::debug!(order, "computing determinant");
    expand(a)
}

/// Recursive step; `a` is already known to be valid and square
pub(crate) fn expand(a: &Matrix) -> Result<f64, MatrixError> {
    if a.rows() == 1 {
        return Ok(a[(0, 0)]);
    }

    let mut result = 0.0;
    for i in 0..a.rows() {
        let sub = minor(a, i, 0)?;
        let term = expand(&sub)? * a[(i, 0)];
        tracing::trace!(order = a.rows(), row = i, term, "expansion term");
        if i % 2 == 1 {
            result -= term;
        } else {
            result += term;
        }
    }
    Ok(result)
}

/// Sum of the main diagonal
pub fn trace(a: &Matrix) -> Result<f64, MatrixError> {
    check_valid(a, "trace")?;
    check_square(a, "trace")?;
    Ok((0..a.rows()).map(|i| a[(i, i)]).sum())
}
