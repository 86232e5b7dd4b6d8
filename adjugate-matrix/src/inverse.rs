//! Cofactor matrix, adjugate and inverse

use adjugate_core::{EngineConfig, MatrixError};
use crate::types::Matrix;
use crate::helpers::*;
use crate::ops::{scale, transpose};
use crate::props::{determinant_with, expand, minor};

/// Matrix of signed minor determinants.
///
/// Defined only for square matrices of order 2 or more.
pub fn cofactors(a: &Matrix) -> Result<Matrix, MatrixError> {
    check_valid(a, "cofactors")?;
    check_square(a, "cofactors")?;
    if a.rows() < 2 {
        return Err(MatrixError::mismatch("cofactors: undefined for a 1×1 matrix"));
    }

    let n = a.rows();
    let mut result = Matrix::new(n, n)?;
    for i in 0..n {
        for j in 0..n {
            let det = expand(&minor(a, i, j)?)?;
            result[(i, j)] = if (i + j) % 2 == 1 { -det } else { det };
        }
    }
    Ok(result)
}

/// Transpose of the cofactor matrix
pub fn adjugate(a: &Matrix) -> Result<Matrix, MatrixError> {
    transpose(&cofactors(a)?)
}

/// Inverse via adjugate scaled by `1 / determinant`
pub fn inverse(a: &Matrix) -> Result<Matrix, MatrixError> {
    inverse_with(a, &EngineConfig::default())
}

/// Inverse treating `|determinant| <= config.eps` or a NaN determinant as singular
pub fn inverse_with(a: &Matrix, config: &EngineConfig) -> Result<Matrix, MatrixError> {
    check_valid(a, "inverse")?;
    check_square(a, "inverse")?;

    let order = a.rows();
    tracing::debug!(order, "computing inverse");
    let det = determinant_with(a, config)?;
    if det.is_nan() || det.abs() <= config.eps {
        tracing::debug!(order, det, "rejecting singular matrix");
        return Err(MatrixError::Singular { determinant: det });
    }

    // The adjugate of a 1×1 matrix is [[1]]
    if order == 1 {
        return Matrix::from_shape_vec((1, 1), vec![1.0 / det]);
    }

    scale(&adjugate(a)?, 1.0 / det)
}
