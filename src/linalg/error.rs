use strum::{AsRefStr, Display};
use thiserror::Error;

/// Binary operation that requires both operands to share a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Addition,
    Multiplication,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("matrix size cannot be negative: {0}")]
    InvalidSize(isize),
    #[error("index ({row}, {col}) out of range for a {size}x{size} matrix")]
    IndexOutOfRange { row: isize, col: isize, size: usize },
    #[error("matrix sizes must match for {op}: {left}x{left} and {right}x{right}")]
    SizeMismatch {
        op: Operation,
        left: usize,
        right: usize,
    },
    #[error("matrix is not square: expected {expected} values, found {found}")]
    NotSquare { expected: usize, found: usize },
    #[error("could not read matrices: {0}")]
    ReadFailure(String),
    #[error("could not parse matrix: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
