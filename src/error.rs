use thiserror::Error;

// Unified error type for spanmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("inconsistent matrix dimensions: row {0} has {1} columns, expected {2}")]
    DimensionMismatch(usize, usize, usize),
    #[error("data length {2} does not match shape {0}x{1}")]
    ShapeDataMismatch(usize, usize, usize),
    #[error("row index {0} out of range for {1} rows")]
    RowOutOfRange(usize, usize),
    #[error("column index {0} out of range for {1} columns")]
    ColOutOfRange(usize, usize),
    #[error("span step cannot be zero")]
    ZeroStep,
    #[error("cannot perform operation: operand is not a matrix of the expected element type")]
    TypeMismatch,
}
