//! 3x3 matrix (single precision).

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::AlgebraError;
use crate::float::{approx_eq, hash_bits};
use crate::vector::Vector3D;

/// Number of rows and columns.
const DIM: usize = 3;

/// 3x3 matrix (single precision).
///
/// Cells are stored row-major as `data[row][column]`, while vectors map onto
/// columns: [`Matrix3D::from_cols`] places a vector's x, y and z in rows 0, 1
/// and 2 of the given column.
///
/// The matrix owns its storage. Constructors copy their input and accessors
/// copy their output, so no caller ever aliases the cells.
///
/// Two matrices compare equal when every cell differs by less than
/// [`crate::PRECISION`], and a matrix always equals itself, even with inf or
/// NaN cells. The [`Hash`] implementation combines one hash per row
/// and is only approximately consistent with that equality: matrices holding
/// the same cell values always hash equal, matrices that differ within the
/// tolerance usually do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix3D {
    data: [[f32; DIM]; DIM],
}

impl Matrix3D {
    /// Matrix with all cells set to 0.
    pub const ZERO: Self = Self::splat(0.0);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Create a matrix with all cells set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self {
            data: [[value; DIM]; DIM],
        }
    }

    /// Create a matrix from a row-major array, `rows[row][column]`.
    #[inline]
    pub const fn from_rows(rows: [[f32; DIM]; DIM]) -> Self {
        Self { data: rows }
    }

    /// Create a matrix from a raw row-major grid of arbitrary shape.
    ///
    /// The grid must have exactly 3 rows of exactly 3 values each. The values
    /// are copied, so later changes to `grid` do not reach the matrix.
    ///
    /// # Arguments
    ///
    /// * `grid` - The rows of the matrix, e.g. `&[Vec<f32>]` or `&[[f32; 3]]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidShape`] if the grid has too few or too many
    /// rows, or if any row has too few or too many columns.
    pub fn try_from_grid<R: AsRef<[f32]>>(grid: &[R]) -> Result<Self, AlgebraError> {
        if grid.len() != DIM {
            let cols = grid.first().map_or(0, |row| row.as_ref().len());
            return Err(invalid_shape(grid.len(), cols));
        }

        let mut data = [[0.0; DIM]; DIM];
        for (dst, src) in data.iter_mut().zip(grid) {
            let src = src.as_ref();
            if src.len() != DIM {
                return Err(invalid_shape(grid.len(), src.len()));
            }
            dst.copy_from_slice(src);
        }

        Ok(Self { data })
    }

    /// Create a matrix from three column vectors.
    #[inline]
    pub fn from_cols(col0: Vector3D, col1: Vector3D, col2: Vector3D) -> Self {
        Self {
            data: [
                [col0.x(), col1.x(), col2.x()],
                [col0.y(), col1.y(), col2.y()],
                [col0.z(), col1.z(), col2.z()],
            ],
        }
    }

    /// Get a column as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfBounds`] if `column` is not in `0..3`.
    pub fn col(&self, column: usize) -> Result<Vector3D, AlgebraError> {
        let column = check_index(column)?;
        Ok(self.col_unchecked(column))
    }

    /// Get a copy of a row.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfBounds`] if `row` is not in `0..3`.
    pub fn row(&self, row: usize) -> Result<[f32; DIM], AlgebraError> {
        let row = check_index(row)?;
        Ok(self.data[row])
    }

    /// Get the value at `row` and `column`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfBounds`] if either index is not in `0..3`.
    pub fn get(&self, row: usize, column: usize) -> Result<f32, AlgebraError> {
        let (row, column) = (check_index(row)?, check_index(column)?);
        Ok(self.data[row][column])
    }

    /// Replace the value at `row` and `column`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfBounds`] if either index is not in `0..3`.
    /// The matrix is left untouched in that case.
    pub fn set(&mut self, row: usize, column: usize, value: f32) -> Result<(), AlgebraError> {
        let (row, column) = (check_index(row)?, check_index(column)?);
        self.data[row][column] = value;
        Ok(())
    }

    /// Copy the cells out as a row-major array.
    #[inline]
    pub fn to_rows(&self) -> [[f32; DIM]; DIM] {
        self.data
    }

    #[inline]
    fn col_unchecked(&self, column: usize) -> Vector3D {
        Vector3D::new(
            self.data[0][column],
            self.data[1][column],
            self.data[2][column],
        )
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        let mut data = self.data;
        data.iter_mut().flatten().for_each(|v| *v = f(*v));
        Self { data }
    }

    fn zip_map(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut data = self.data;
        for (dst, src) in data.iter_mut().flatten().zip(rhs.data.iter().flatten()) {
            *dst = f(*dst, *src);
        }
        Self { data }
    }
}

#[inline]
fn check_index(index: usize) -> Result<usize, AlgebraError> {
    if index < DIM {
        return Ok(index);
    }
    log::debug!("rejecting index {index} on a {DIM}x{DIM} matrix");
    Err(AlgebraError::IndexOutOfBounds { index, size: DIM })
}

fn invalid_shape(rows: usize, cols: usize) -> AlgebraError {
    log::debug!("rejecting {rows}x{cols} grid for a {DIM}x{DIM} matrix");
    AlgebraError::InvalidShape { rows, cols }
}

impl PartialEq for Matrix3D {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(&a, &b)| approx_eq(a, b))
    }
}

/// Each row is reduced to its own `u64` first; the three row hashes are what reach `state`.
impl Hash for Matrix3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for row in &self.data {
            let mut row_hasher = DefaultHasher::new();
            for &value in row {
                hash_bits(value).hash(&mut row_hasher);
            }
            row_hasher.finish().hash(state);
        }
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Matrix3D {
    type Epsilon = <f32 as approx::AbsDiffEq>::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        crate::PRECISION
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Matrix3D {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative))
    }
}

impl fmt::Display for Matrix3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3D")?;
        writeln!(f, "{{")?;
        for row in &self.data {
            writeln!(f, "    {{ {}, {}, {} }},", row[0], row[1], row[2])?;
        }
        write!(f, "}}")
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3D {
    type Output = f32;

    /// Panics if either index is out of range; use [`Matrix3D::get`] for a checked read.
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.data[row][column]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3D {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][column]
    }
}

// Conversions to and from row-major arrays.
impl From<[[f32; DIM]; DIM]> for Matrix3D {
    #[inline]
    fn from(rows: [[f32; DIM]; DIM]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Matrix3D> for [[f32; DIM]; DIM] {
    #[inline]
    fn from(m: Matrix3D) -> Self {
        m.to_rows()
    }
}

impl TryFrom<&[Vec<f32>]> for Matrix3D {
    type Error = AlgebraError;

    fn try_from(grid: &[Vec<f32>]) -> Result<Self, Self::Error> {
        Self::try_from_grid(grid)
    }
}

// Conversions to and from the column-major glam type.
impl From<glam::Mat3> for Matrix3D {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Matrix3D> for glam::Mat3 {
    #[inline]
    fn from(m: Matrix3D) -> Self {
        glam::Mat3::from_cols(
            m.col_unchecked(0).into(),
            m.col_unchecked(1).into(),
            m.col_unchecked(2).into(),
        )
    }
}

// Matrix addition
impl std::ops::Add<Matrix3D> for Matrix3D {
    type Output = Matrix3D;

    #[inline]
    fn add(self, rhs: Matrix3D) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

// Matrix subtraction
impl std::ops::Sub<Matrix3D> for Matrix3D {
    type Output = Matrix3D;

    #[inline]
    fn sub(self, rhs: Matrix3D) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

// Scalar multiplication
impl std::ops::Mul<f32> for Matrix3D {
    type Output = Matrix3D;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

// Scalar multiplication (reverse)
impl std::ops::Mul<Matrix3D> for f32 {
    type Output = Matrix3D;

    #[inline]
    fn mul(self, rhs: Matrix3D) -> Self::Output {
        rhs * self
    }
}

// Scalar division, through the reciprocal like `Vector3D`.
impl std::ops::Div<f32> for Matrix3D {
    type Output = Matrix3D;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

// Matrix-matrix multiplication.
impl std::ops::Mul<Matrix3D> for Matrix3D {
    type Output = Matrix3D;

    fn mul(self, rhs: Matrix3D) -> Self::Output {
        let (l, r) = (&self.data, &rhs.data);
        let mut data = [[0.0; DIM]; DIM];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j];
            }
        }
        Self { data }
    }
}

// Matrix-vector multiplication.
impl std::ops::Mul<Vector3D> for Matrix3D {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Self::Output {
        let [x, y, z] = self
            .data
            .map(|row| row[0] * rhs.x() + row[1] * rhs.y() + row[2] * rhs.z());
        Vector3D::new(x, y, z)
    }
}
