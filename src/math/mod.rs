//! Small dense containers the rest of the crate operates on.
//!
//! Provides `Matrix` (2D, row-major) and `Vector` (1D) lightweight
//! containers with minimal convenience methods. These types are
//! intentionally small and dependency-free to keep the crate portable and
//! easy to test; the numeric routines in `crate::linalg` and `crate::stats`
//! build on them.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
