//! Closed-form and elimination-based numerics over `Matrix<f64>`.
//!
//! Everything here follows the same discipline: validate operand shapes
//! first, then determinants, then compute, so a `DimensionMismatch` is
//! always reported ahead of a `Singular` for the same call.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::math::Matrix;

/// Determinants with magnitude below this threshold are treated as zero,
/// so near-singular matrices are rejected instead of dividing by a value
/// that would blow the result up.
pub const EPSILON: f64 = 1e-10;

/// Eigenvalues of a 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Eigenvalues {
    /// Two real roots. `lambda1` carries the `+sqrt(D)` branch of the
    /// quadratic formula, so `lambda1 >= lambda2`; the two coincide when
    /// the discriminant is zero.
    Real { lambda1: f64, lambda2: f64 },
    /// The conjugate pair `re ± im·i`, with `im > 0`.
    Complex { re: f64, im: f64 },
}

impl Eigenvalues {
    pub fn is_real(&self) -> bool {
        matches!(self, Eigenvalues::Real { .. })
    }
}

fn require_square(matrix: &Matrix<f64>, operation: &'static str) -> Result<usize, LinalgError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(LinalgError::DimensionMismatch {
            operation,
            expected: (rows, rows),
            found: (rows, cols),
        });
    }
    Ok(rows)
}

/// Determinant of a square matrix via Gaussian elimination with partial
/// pivoting. The determinant is the signed product of the pivots.
pub fn determinant(matrix: &Matrix<f64>) -> Result<f64, LinalgError> {
    let n = require_square(matrix, "determinant")?;
    let mut work = matrix.to_vec();
    let mut det = 1.0f64;

    for col in 0..n {
        // bring the largest remaining entry in this column up to the pivot
        let mut pivot_row = col;
        for r in (col + 1)..n {
            if work[r * n + col].abs() > work[pivot_row * n + col].abs() {
                pivot_row = r;
            }
        }
        let pivot = work[pivot_row * n + col];
        if pivot == 0.0 {
            return Ok(0.0);
        }
        if pivot_row != col {
            for c in 0..n {
                work.swap(col * n + c, pivot_row * n + c);
            }
            det = -det;
        }
        det *= pivot;
        for r in (col + 1)..n {
            let factor = work[r * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                work[r * n + c] -= factor * work[col * n + c];
            }
        }
    }
    Ok(det)
}

/// General n x n inverse via Gauss-Jordan elimination on the augmented
/// system `[A | I]`, with partial pivoting.
///
/// Fails with `Singular` when `|det A| < EPSILON`.
pub fn inverse(matrix: &Matrix<f64>) -> Result<Matrix<f64>, LinalgError> {
    let n = require_square(matrix, "inverse")?;
    let det = determinant(matrix)?;
    if det.abs() < EPSILON {
        debug!("refusing to invert: determinant {:e} below threshold", det);
        return Err(LinalgError::Singular { det });
    }

    let width = 2 * n;
    let mut aug: Matrix<f64> = Matrix::zeros(n, width);
    for r in 0..n {
        for c in 0..n {
            aug[(r, c)] = matrix[(r, c)];
        }
        aug[(r, n + r)] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        for r in (col + 1)..n {
            if aug[(r, col)].abs() > aug[(pivot_row, col)].abs() {
                pivot_row = r;
            }
        }
        if aug[(pivot_row, col)].abs() < EPSILON {
            return Err(LinalgError::Singular { det });
        }
        if pivot_row != col {
            for c in 0..width {
                let tmp = aug[(col, c)];
                aug[(col, c)] = aug[(pivot_row, c)];
                aug[(pivot_row, c)] = tmp;
            }
        }

        let pivot = aug[(col, col)];
        for c in 0..width {
            aug[(col, c)] /= pivot;
        }
        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = aug[(r, col)];
            if factor == 0.0 {
                continue;
            }
            for c in 0..width {
                aug[(r, c)] -= factor * aug[(col, c)];
            }
        }
    }

    let mut out = Matrix::zeros(n, n);
    for r in 0..n {
        for c in 0..n {
            out[(r, c)] = aug[(r, n + c)];
        }
    }
    Ok(out)
}

/// Closed-form inverse of a 2x2 matrix: the adjugate over the determinant.
///
/// Fails with `DimensionMismatch` for any other shape and with `Singular`
/// when `|det| < EPSILON`.
pub fn inverse_2x2(matrix: &Matrix<f64>) -> Result<Matrix<f64>, LinalgError> {
    if matrix.shape() != (2, 2) {
        return Err(LinalgError::DimensionMismatch {
            operation: "inverse_2x2",
            expected: (2, 2),
            found: matrix.shape(),
        });
    }
    let (a, b) = (matrix[(0, 0)], matrix[(0, 1)]);
    let (c, d) = (matrix[(1, 0)], matrix[(1, 1)]);
    let det = a * d - b * c;
    if det.abs() < EPSILON {
        debug!("2x2 determinant {:e} below threshold", det);
        return Err(LinalgError::Singular { det });
    }
    Matrix::from_rows(vec![
        vec![d / det, -b / det],
        vec![-c / det, a / det],
    ])
}

/// Eigenvalues of a 2x2 matrix from the characteristic polynomial
/// `λ² - tr·λ + det`.
///
/// The discriminant's sign is branched on explicitly: a negative
/// discriminant yields `Eigenvalues::Complex` rather than attempting a
/// real square root of a negative number.
pub fn eigenvalues_2x2(matrix: &Matrix<f64>) -> Result<Eigenvalues, LinalgError> {
    if matrix.shape() != (2, 2) {
        return Err(LinalgError::DimensionMismatch {
            operation: "eigenvalues_2x2",
            expected: (2, 2),
            found: matrix.shape(),
        });
    }
    let (a, b) = (matrix[(0, 0)], matrix[(0, 1)]);
    let (c, d) = (matrix[(1, 0)], matrix[(1, 1)]);
    let trace = a + d;
    let det = a * d - b * c;
    let disc = trace * trace - 4.0 * det;

    if disc >= 0.0 {
        let root = disc.sqrt();
        Ok(Eigenvalues::Real {
            lambda1: (trace + root) / 2.0,
            lambda2: (trace - root) / 2.0,
        })
    } else {
        Ok(Eigenvalues::Complex {
            re: trace / 2.0,
            im: (-disc).sqrt() / 2.0,
        })
    }
}

/// Standard matrix product: `m x n` times `n x p` yields `m x p`.
pub fn matmul(left: &Matrix<f64>, right: &Matrix<f64>) -> Result<Matrix<f64>, LinalgError> {
    if left.ncols() != right.nrows() {
        return Err(LinalgError::DimensionMismatch {
            operation: "matmul",
            expected: left.shape(),
            found: right.shape(),
        });
    }
    let mut out = Matrix::zeros(left.nrows(), right.ncols());
    for i in 0..left.nrows() {
        for k in 0..left.ncols() {
            let a = left[(i, k)];
            for j in 0..right.ncols() {
                out[(i, j)] += a * right[(k, j)];
            }
        }
    }
    Ok(out)
}

/// Generalized transform `T⁻¹ · A · S`.
///
/// Validates that `T` is square with dimension equal to `A`'s row count
/// and that `A`'s column count equals `S`'s row count; then inverts `T`
/// (failing with `Singular` when `|det T| < EPSILON`) and multiplies the
/// chain through, producing an `m x p` result for an `m x n` input `A`
/// and an `n x p` input `S`.
pub fn transform(
    a: &Matrix<f64>,
    t: &Matrix<f64>,
    s: &Matrix<f64>,
) -> Result<Matrix<f64>, LinalgError> {
    let dim = require_square(t, "transform")?;
    if dim != a.nrows() {
        return Err(LinalgError::DimensionMismatch {
            operation: "transform",
            expected: t.shape(),
            found: a.shape(),
        });
    }
    if a.ncols() != s.nrows() {
        return Err(LinalgError::DimensionMismatch {
            operation: "transform",
            expected: a.shape(),
            found: s.shape(),
        });
    }
    let t_inv = inverse(t)?;
    matmul(&matmul(&t_inv, a)?, s)
}
