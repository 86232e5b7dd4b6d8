//! Adjugate Core - Fundamental types
//!
//! This crate provides the core types used throughout Adjugate:
//! - `MatrixError`: Error taxonomy for matrix operations
//! - `Status`: Closed set of call outcomes (Ok, InvalidMatrix, CalculationError)
//! - `ErrorReport`: Structured, serializable errors
//! - `EngineConfig`: Tolerance and expansion settings

mod config;
mod error;

pub use config::{EngineConfig, DEFAULT_EXPANSION_WARN_ORDER, EPS};
pub use error::{codes, ErrorReport, MatrixError, Status};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{EngineConfig, MatrixError, Status, EPS};
    pub use crate::error::codes;
}
