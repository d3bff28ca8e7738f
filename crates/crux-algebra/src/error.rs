/// An error type for the algebra types.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The raw grid handed to a matrix constructor is not 3x3.
    ///
    /// For ragged grids `cols` is the length of the first row that is not 3 wide.
    #[error("Invalid shape: expected a 3x3 grid, got {rows}x{cols}")]
    InvalidShape {
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the offending row
        cols: usize,
    },

    /// Row or column index outside of `0..size`.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}
