//! Axis statistics over the crate math types.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::math::{Matrix, Vector};

/// Which direction to aggregate over when reducing a matrix.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl FromStr for Axis {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" => Ok(Axis::Row),
            "column" => Ok(Axis::Column),
            other => {
                debug!("rejecting axis mode {:?}", other);
                Err(LinalgError::InvalidArgument(format!(
                    "unknown axis mode {:?}, expected \"row\" or \"column\"",
                    other
                )))
            }
        }
    }
}

/// Arithmetic mean of each row or column of `matrix`.
///
/// For `Axis::Row` the result has one entry per row; for `Axis::Column`
/// one entry per column. An empty matrix yields an empty vector. Parsing
/// the axis from a string (`Axis::from_str`) is where an unrecognized
/// mode fails, so an empty result here always means an empty input.
///
/// # Arguments
///
/// * `matrix` - The matrix to reduce.
/// * `axis` - Direction of aggregation.
///
/// # Returns
///
/// A vector of means along the requested axis.
pub fn mean_axis(matrix: &Matrix<f64>, axis: Axis) -> Vector<f64> {
    let (nrows, ncols) = matrix.shape();
    if matrix.is_empty() {
        return Vector::from_vec(Vec::new());
    }

    match axis {
        Axis::Row => {
            let mut means = Vec::with_capacity(nrows);
            for r in 0..nrows {
                let sum: f64 = matrix.row_slice(r).iter().sum();
                means.push(sum / ncols as f64);
            }
            Vector::from_vec(means)
        }
        Axis::Column => {
            let mut sums = vec![0.0f64; ncols];
            for r in 0..nrows {
                for (c, value) in matrix.row_slice(r).iter().enumerate() {
                    sums[c] += value;
                }
            }
            let nrows_f = nrows as f64;
            for v in sums.iter_mut() {
                *v /= nrows_f;
            }
            Vector::from_vec(sums)
        }
    }
}
