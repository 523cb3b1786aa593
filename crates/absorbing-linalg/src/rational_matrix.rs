//! Dense matrices over the rationals.
//!
//! The matrices involved in absorption analysis are small (tens of states),
//! so a row-major dense layout with exact `Rational` entries is both the
//! simplest and the fastest representation.

use std::ops::Index;

use num_traits::{One, Zero};
use tracing::trace;

use absorbing_integers::Rational;

use crate::LinalgError;

/// Dense matrix of exact rationals stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl RationalMatrix {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![Rational::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Rational::one();
        }
        m
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// An empty vector yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_cols)
        {
            return Err(LinalgError::DimensionMismatch {
                operation: "from_rows",
                detail: format!(
                    "row {index} has {} entries, expected {num_cols}",
                    row.len()
                ),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from integer rows, each entry with denominator 1.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the rows differ in length.
    pub fn from_integer_rows(rows: &[Vec<i64>]) -> Result<Self, LinalgError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Rational::from).collect())
                .collect(),
        )
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        assert!(row < self.num_rows, "row {row} out of bounds");
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Element-wise sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, LinalgError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `self.num_cols() !=
    /// other.num_rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                operation: "multiply",
                detail: format!(
                    "left is {}x{}, right is {}x{}",
                    self.num_rows, self.num_cols, other.num_rows, other.num_cols
                ),
            });
        }

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = Rational::zero();
                for k in 0..self.num_cols {
                    let (a, b) = (&self[(i, k)], &other[(k, j)]);
                    if !a.is_zero() && !b.is_zero() {
                        sum = sum + a * b;
                    }
                }
                result.data[i * other.num_cols + j] = sum;
            }
        }
        Ok(result)
    }

    /// Computes the inverse by Gauss-Jordan elimination on `[A | I]`.
    ///
    /// Pivots are chosen as the first nonzero entry at or below the diagonal,
    /// which is always exact in rational arithmetic. Elimination runs on a
    /// private augmented copy; `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the matrix is not
    /// square, and [`LinalgError::SingularMatrix`] if some column has no
    /// usable pivot.
    pub fn invert(&self) -> Result<Self, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                operation: "invert",
                detail: format!(
                    "matrix is {}x{}, expected a square matrix",
                    self.num_rows, self.num_cols
                ),
            });
        }
        let n = self.num_rows;

        // Augmented matrix [A | I]
        let mut aug = Self::zeros(n, 2 * n);
        for i in 0..n {
            aug.row_mut(i)[..n].clone_from_slice(self.row(i));
            aug.data[i * 2 * n + n + i] = Rational::one();
        }

        for col in 0..n {
            let pivot_row = (col..n)
                .find(|&row| !aug[(row, col)].is_zero())
                .ok_or(LinalgError::SingularMatrix { column: col })?;
            aug.swap_rows(col, pivot_row);

            let inv = aug[(col, col)].recip()?;
            aug.scale_row(col, &inv);

            for row in 0..n {
                if row != col && !aug[(row, col)].is_zero() {
                    let factor = -&aug[(row, col)];
                    aug.add_scaled_row(row, col, &factor);
                }
            }
            trace!(column = col, pivot_row, "eliminated pivot column");
        }

        // Extract inverse from right half
        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            inv.row_mut(i).clone_from_slice(&aug.row(i)[n..]);
        }
        Ok(inv)
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(&Rational, &Rational) -> Rational,
    ) -> Result<Self, LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                operation,
                detail: format!(
                    "left is {}x{}, right is {}x{}",
                    self.num_rows, self.num_cols, other.num_rows, other.num_cols
                ),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    fn row_mut(&mut self, row: usize) -> &mut [Rational] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    fn add_scaled_row(&mut self, target: usize, source: usize, scale: &Rational) {
        for k in 0..self.num_cols {
            let val = &self[(source, k)] * scale;
            let idx = target * self.num_cols + k;
            self.data[idx] = &self.data[idx] + &val;
        }
    }

    /// Scales a row by a scalar.
    fn scale_row(&mut self, row: usize, scale: &Rational) {
        for value in self.row_mut(row) {
            *value = &*value * scale;
        }
    }
}

impl Index<(usize, usize)> for RationalMatrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}
