use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::linalg::{
    helpers::{self, DEFAULT_SWAP, DEFAULT_UPDATE},
    Matrix,
};

/// Indices and values handed to the helper mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutations {
    pub swap_rows: (isize, isize),
    pub swap_cols: (isize, isize),
    pub update: (isize, isize, i32),
}

impl Default for Mutations {
    fn default() -> Self {
        Self {
            swap_rows: DEFAULT_SWAP,
            swap_cols: DEFAULT_SWAP,
            update: DEFAULT_UPDATE,
        }
    }
}

pub struct Driver {
    a: Matrix,
    b: Matrix,
    mutations: Mutations,
}

impl Driver {
    pub fn on(a: Matrix, b: Matrix) -> Self {
        Self {
            a,
            b,
            mutations: Mutations::default(),
        }
    }

    pub fn with(mut self, mutations: Mutations) -> Self {
        self.mutations = mutations;
        self
    }

    /// Writes every demonstration step to `out`, in order.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let (a, b) = (&self.a, &self.b);

        write!(out, "\nMatrix A:\n{}", a)?;
        write!(out, "\nMatrix B:\n{}", b)?;

        let sum = (a + b).context("A + B")?;
        write!(out, "\nA + B:\n{}", sum)?;

        let product = (a * b).context("A * B")?;
        write!(out, "\nA * B:\n{}", product)?;

        let sums = a.diagonal_sums();
        debug!("diagonal sums of A: {:?}", sums);
        writeln!(out, "\nMain diagonal sum: {}", sums.main)?;
        writeln!(out, "Secondary diagonal sum (minus repeat center): {}", sums.secondary)?;
        writeln!(out, "Total X sum: {}", sums.total())?;

        let Mutations {
            swap_rows: (r1, r2),
            swap_cols: (c1, c2),
            update: (r, c, val),
        } = self.mutations;

        writeln!(out, "\nSwapping rows:")?;
        helpers::swap_rows(a.clone(), r1, r2, out)?;

        writeln!(out, "\nSwapping columns:")?;
        helpers::swap_cols(a.clone(), c1, c2, out)?;

        writeln!(out, "\nUpdating element:")?;
        helpers::update_element(a.clone(), r, c, val, out)?;

        writeln!(out, "\nDone.")?;
        Ok(())
    }
}
