//! Matrix errors and status codes
//!
//! Errors are values returned to the immediate caller. Nothing here panics
//! or keeps global state; a failed call never hands back a partial result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_MATRIX: &str = "INVALID_MATRIX";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const SINGULAR_MATRIX: &str = "SINGULAR_MATRIX";
    pub const ALLOCATION_FAILURE: &str = "ALLOCATION_FAILURE";
}

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum MatrixError {
    /// Argument is malformed: non-positive dimension or missing storage
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Arguments are valid but their shapes are incompatible
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Structurally valid but numerically non-invertible
    #[error("Singular matrix: determinant {determinant} is within tolerance of zero")]
    Singular { determinant: f64 },

    #[error("Allocation failure: {0}")]
    AllocationFailure(String),
}

/// Closed set of call outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    InvalidMatrix,
    /// Dimension mismatch or singularity
    CalculationError,
}

impl Status {
    /// Classify the outcome of an operation
    pub fn of<T>(result: &Result<T, MatrixError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl MatrixError {
    pub fn invalid(details: impl Into<String>) -> Self {
        MatrixError::InvalidMatrix(details.into())
    }

    pub fn mismatch(details: impl Into<String>) -> Self {
        MatrixError::DimensionMismatch(details.into())
    }

    pub fn allocation(details: impl Into<String>) -> Self {
        MatrixError::AllocationFailure(details.into())
    }

    /// Machine-readable code from [`codes`]
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::InvalidMatrix(_) => codes::INVALID_MATRIX,
            MatrixError::DimensionMismatch(_) => codes::DIMENSION_MISMATCH,
            MatrixError::Singular { .. } => codes::SINGULAR_MATRIX,
            MatrixError::AllocationFailure(_) => codes::ALLOCATION_FAILURE,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            MatrixError::InvalidMatrix(_) | MatrixError::AllocationFailure(_) => Status::InvalidMatrix,
            MatrixError::DimensionMismatch(_) | MatrixError::Singular { .. } => Status::CalculationError,
        }
    }

    /// True for errors a caller may fix by changing shapes or values
    pub fn is_calculation_error(&self) -> bool {
        self.status() == Status::CalculationError
    }
}

/// Structured, serializable error for reporting to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    pub status: Status,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&MatrixError> for ErrorReport {
    fn from(err: &MatrixError) -> Self {
        let suggestion = match err {
            MatrixError::InvalidMatrix(_) => "Construct the matrix with positive dimensions before use",
            MatrixError::DimensionMismatch(_) => "Check operand shapes",
            MatrixError::Singular { .. } => "Matrix has no inverse; check for linearly dependent rows",
            MatrixError::AllocationFailure(_) => "Reduce matrix dimensions",
        };
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            status: err.status(),
            suggestion: Some(suggestion.to_string()),
        }
    }
}

impl From<MatrixError> for ErrorReport {
    fn from(err: MatrixError) -> Self {
        ErrorReport::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
