//! Demonstration mutations over a matrix taken by value.
//!
//! Unlike the bounds checks on [`Matrix`] itself, these never fail on bad
//! indices: they report the problem to `out` and skip the operation. The
//! caller's matrix is never touched because each helper works on its own copy.

use std::io::{self, Write};

use log::warn;
use strum::Display;

use super::Matrix;

pub const DEFAULT_SWAP: (isize, isize) = (0, 1);
pub const DEFAULT_UPDATE: (isize, isize, i32) = (0, 0, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
enum Axis {
    Row,
    Column,
}

pub fn swap_rows<W: Write>(matrix: Matrix, r1: isize, r2: isize, out: &mut W) -> io::Result<()> {
    swap(matrix, Axis::Row, r1, r2, out)
}

pub fn swap_cols<W: Write>(matrix: Matrix, c1: isize, c2: isize, out: &mut W) -> io::Result<()> {
    swap(matrix, Axis::Column, c1, c2, out)
}

pub fn update_element<W: Write>(
    mut matrix: Matrix,
    r: isize,
    c: isize,
    val: i32,
    out: &mut W,
) -> io::Result<()> {
    match matrix.get_mut(r, c) {
        Ok(element) => *element = val,
        Err(err) => {
            warn!("skipping update: {}", err);
            return writeln!(out, "Invalid indices.");
        }
    }
    write!(out, "{}", matrix.format(Some("Matrix after update")))
}

fn swap<W: Write>(mut matrix: Matrix, axis: Axis, i: isize, j: isize, out: &mut W) -> io::Result<()> {
    let (i, j) = match (matrix.checked_index(i), matrix.checked_index(j)) {
        (Some(i), Some(j)) => (i, j),
        _ => {
            warn!("skipping {} swap: indices ({}, {}) out of range for size {}", axis, i, j, matrix.size());
            return writeln!(out, "Invalid {} indices.", axis);
        }
    };

    let n = matrix.size();
    let data = matrix.as_mut_slice();
    for k in 0..n {
        match axis {
            Axis::Row => data.swap(i * n + k, j * n + k),
            Axis::Column => data.swap(k * n + i, k * n + j),
        }
    }

    write!(out, "{}", matrix.format(Some(&format!("Matrix after {} swap", axis))))
}
