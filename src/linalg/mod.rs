pub use error::{MatrixError, Operation};
pub use matrix::{DiagonalSums, Matrix};

pub mod error;
pub mod helpers;
pub mod input;

mod display;
mod matrix;
