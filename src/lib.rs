//! smallmat: linear-algebra primitives for small dense matrices.
//!
//! This crate provides lightweight `Matrix` and `Vector` containers with
//! the handful of operations that come up when shuffling small numeric
//! tables around: transpose, reshape, scalar multiplication, matrix-vector
//! products, axis means, and closed-form 2x2 plus general Gauss-Jordan
//! inversion and eigenvalue routines.
//!
//! The design favors small, testable modules with typed failure values:
//! every operation that can reject its input returns a `LinalgError`
//! rather than panicking or printing, so callers can always tell a failed
//! computation apart from a legitimately empty result.
pub mod error;
pub mod linalg;
pub mod math;
pub mod stats;

pub use error::LinalgError;
pub use math::{Matrix, Vector};
