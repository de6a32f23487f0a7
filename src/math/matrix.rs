use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::math::vector::Vector;

/// Dense 2D container with row-major storage.
///
/// Rows are always equal length (enforced at construction), and a matrix
/// with zero rows has zero columns by convention, so `shape()` never
/// reports a dimension that cannot hold an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, LinalgError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        // normalize degenerate shapes so 0xN and Nx0 collapse to 0x0
        if rows == 0 || cols == 0 {
            return Ok(Self {
                data,
                rows: 0,
                cols: 0,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::Ragged {
                    row: idx,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        Vector::from_vec(values)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows)
            .map(|r| self.row_slice(r).to_vec())
            .collect()
    }

    /// Swap rows and columns: the result holds `B[i][j] = A[j][i]`.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Reinterpret the element stream under a new shape.
    ///
    /// Storage is already row-major, so this is a pure relabeling; it
    /// fails with `DimensionMismatch` when the element counts disagree.
    pub fn reshape(&self, shape: (usize, usize)) -> Result<Matrix<T>, LinalgError>
    where
        T: Clone,
    {
        if self.rows * self.cols != shape.0 * shape.1 {
            return Err(LinalgError::DimensionMismatch {
                operation: "reshape",
                expected: self.shape(),
                found: shape,
            });
        }
        Matrix::from_shape_vec(shape, self.data.clone())
    }

    /// Multiply every element by `scalar`, preserving shape.
    pub fn scale(&self, scalar: T) -> Matrix<T>
    where
        T: Copy + Mul<Output = T>,
    {
        self.mapv(|&v| v * scalar)
    }

    /// Matrix-vector product: an `m x n` matrix against a length-`n`
    /// vector yields a length-`m` vector.
    ///
    /// The vector length must equal the column count exactly; anything
    /// else fails with `DimensionMismatch`. An empty matrix yields an
    /// empty result against an empty vector.
    pub fn dot(&self, rhs: &Vector<T>) -> Result<Vector<T>, LinalgError>
    where
        T: Copy + Zero + Mul<Output = T>,
    {
        if self.cols != rhs.len() {
            return Err(LinalgError::DimensionMismatch {
                operation: "dot",
                expected: self.shape(),
                found: (rhs.len(), 1),
            });
        }
        let mut out = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut acc = T::zero();
            for (a, b) in self.row_slice(row).iter().zip(rhs.iter()) {
                acc = acc + *a * *b;
            }
            out.push(acc);
        }
        Ok(Vector::from_vec(out))
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        let (rows, cols) = if rows == 0 || cols == 0 {
            (0, 0)
        } else {
            (rows, cols)
        };
        Matrix {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::from_elem(rows, cols, T::zero())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(dim: usize) -> Self {
        let mut out = Matrix::zeros(dim, dim);
        for i in 0..dim {
            out[(i, i)] = T::one();
        }
        out
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T> Mul<T> for &Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T> Mul<T> for Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Mirror of `Matrix` used to validate deserialized input, so a
/// hand-edited payload cannot smuggle in a buffer that disagrees with its
/// declared shape.
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}
