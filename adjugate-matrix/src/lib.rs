//! Adjugate Matrix - Dense f64 matrix arithmetic
//!
//! Provides the matrix engine for Adjugate:
//! - Construction (create, new, from_rows, from_shape_vec, identity)
//! - Lifecycle (release, validity checks)
//! - Comparison (equals within EPS, equals_with)
//! - Basic operations (add, subtract, scale, multiply, transpose)
//! - Properties (determinant, trace)
//! - Inverse operations (cofactors, adjugate, inverse)
//!
//! The determinant is computed by recursive cofactor expansion along the first
//! column. Work is factorial in the matrix order, so the engine targets small
//! matrices. Every operation borrows its inputs and returns a new matrix.

mod types;
mod helpers;
mod construct;
mod ops;
mod props;
mod inverse;

pub use types::Matrix;
pub use construct::create;
pub use ops::{add, subtract, scale, multiply, transpose};
pub use props::{equals, equals_with, determinant, determinant_with, trace};
pub use inverse::{cofactors, adjugate, inverse, inverse_with};

pub use adjugate_core::{EngineConfig, ErrorReport, MatrixError, Status, EPS};
