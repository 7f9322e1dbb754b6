use std::ops::{Add, Mul};

use log::debug;

use super::error::{MatrixError, Operation, Result};

/// Square `i32` matrix backed by a single row-major buffer.
///
/// Cloning duplicates the buffer, so two matrices never share storage.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dimension: usize,
    data: Vec<i32>,
}

/// Sums along both diagonals of a [`Matrix`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalSums {
    pub main: i64,
    /// Anti-diagonal sum, with the shared center removed for odd dimensions.
    pub secondary: i64,
}

impl DiagonalSums {
    pub fn total(&self) -> i64 {
        self.main + self.secondary
    }
}

impl Matrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zero-filled `n`x`n` matrix. Fails for negative `n`.
    pub fn sized(n: isize) -> Result<Self> {
        let dimension = usize::try_from(n).map_err(|_| MatrixError::InvalidSize(n))?;
        let len = dimension
            .checked_mul(dimension)
            .ok_or(MatrixError::InvalidSize(n))?;
        debug!("allocating {dimension}x{dimension} matrix");
        Ok(Self {
            dimension,
            data: vec![0; len],
        })
    }

    pub fn copy_of(other: &Matrix) -> Self {
        other.clone()
    }

    /// Replaces this matrix with a copy of `other`, reusing the buffer when possible.
    pub fn assign_from(&mut self, other: &Matrix) {
        self.clone_from(other)
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let dimension = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != dimension) {
            return Err(MatrixError::NotSquare {
                expected: dimension,
                found: row.len(),
            });
        }
        Ok(Self {
            dimension,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn from_row_major(dimension: usize, data: Vec<i32>) -> Result<Self> {
        let expected = dimension * dimension;
        if data.len() != expected {
            return Err(MatrixError::NotSquare {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { dimension, data })
    }

    fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            data: vec![0; dimension * dimension],
        }
    }

    pub fn size(&self) -> usize {
        self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.dimension == 0
    }

    pub fn get(&self, row: isize, col: isize) -> Result<i32> {
        self.offset(row, col).map(|i| self.data[i])
    }

    pub fn get_mut(&mut self, row: isize, col: isize) -> Result<&mut i32> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks_exact(0) panics; an empty buffer yields no rows either way
        self.data.chunks_exact(self.dimension.max(1))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Row-major view of the buffer. The length is fixed, so the square
    /// invariant cannot be broken through it.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Converts a signed index into one that is valid for this dimension.
    pub fn checked_index(&self, index: isize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.dimension)
    }

    fn offset(&self, row: isize, col: isize) -> Result<usize> {
        match (self.checked_index(row), self.checked_index(col)) {
            (Some(r), Some(c)) => Ok(r * self.dimension + c),
            _ => Err(MatrixError::IndexOutOfRange {
                row,
                col,
                size: self.dimension,
            }),
        }
    }

    fn ensure_same_size(&self, other: &Matrix, op: Operation) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(MatrixError::SizeMismatch {
                op,
                left: self.dimension,
                right: other.dimension,
            });
        }
        Ok(())
    }

    /// Elementwise sum. Overflow wraps.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_size(other, Operation::Addition)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.wrapping_add(*b))
            .collect();
        Ok(Self {
            dimension: self.dimension,
            data,
        })
    }

    /// Textbook O(N³) product. Overflow wraps.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_size(other, Operation::Multiplication)?;
        let n = self.dimension;
        let mut result = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                result.data[i * n + j] = (0..n).fold(0i32, |sum, k| {
                    sum.wrapping_add(self.data[i * n + k].wrapping_mul(other.data[k * n + j]))
                });
            }
        }
        Ok(result)
    }

    /// Main and secondary diagonal sums, widened to `i64`.
    ///
    /// For odd dimensions the center element lies on both diagonals; it is
    /// subtracted once from the secondary sum so that
    /// [`DiagonalSums::total`] counts it a single time.
    pub fn diagonal_sums(&self) -> DiagonalSums {
        let n = self.dimension;
        let element = |r: usize, c: usize| i64::from(self.data[r * n + c]);

        let main = (0..n).map(|i| element(i, i)).sum();
        let mut secondary: i64 = (0..n).map(|i| element(i, n - 1 - i)).sum();
        if n % 2 == 1 {
            let mid = n / 2;
            secondary -= element(mid, mid);
        }

        DiagonalSums { main, secondary }
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn a() -> Matrix {
        Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    fn b() -> Matrix {
        Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap()
    }

    fn random(n: usize, rng: &mut impl Rng) -> Matrix {
        let data = (0..n * n).map(|_| rng.gen_range(-100..100)).collect();
        Matrix::from_row_major(n, data).unwrap()
    }

    #[test]
    fn sized_is_zero_filled() {
        for n in 0..8isize {
            let matrix = Matrix::sized(n).unwrap();
            assert_eq!(matrix.size(), n as usize);
            for r in 0..n {
                for c in 0..n {
                    assert_eq!(matrix.get(r, c), Ok(0));
                }
            }
        }
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(Matrix::sized(-1), Err(MatrixError::InvalidSize(-1)));
    }

    #[test]
    fn empty_has_no_storage() {
        let matrix = Matrix::empty();
        assert!(matrix.is_empty());
        assert!(matrix.as_slice().is_empty());
        assert_eq!(matrix.rows().count(), 0);
        assert_eq!(matrix, Matrix::sized(0).unwrap());
    }

    #[test]
    fn copies_are_independent() {
        let original = a();
        let mut copy = Matrix::copy_of(&original);
        *copy.get_mut(0, 0).unwrap() = 42;
        assert_eq!(original.get(0, 0), Ok(1));
        assert_eq!(copy.get(0, 0), Ok(42));

        let mut assigned = Matrix::sized(5).unwrap();
        assigned.assign_from(&original);
        *assigned.get_mut(1, 1).unwrap() = -7;
        assert_eq!(assigned.size(), 2);
        assert_eq!(original.get(1, 1), Ok(4));
    }

    #[test]
    fn access_is_row_major() {
        let matrix = a();
        assert_eq!(matrix.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(matrix.get(1, 0), Ok(3));
        let rows: Vec<&[i32]> = matrix.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn out_of_range_access_fails() {
        for n in 0..4isize {
            let mut matrix = Matrix::sized(n).unwrap();
            for (r, c) in [(n, 0), (0, n), (-1, 0), (0, -1), (n + 3, n + 3)] {
                let expected = Err(MatrixError::IndexOutOfRange {
                    row: r,
                    col: c,
                    size: n as usize,
                });
                assert_eq!(matrix.get(r, c), expected);
                assert_eq!(matrix.get_mut(r, c).map(|v| *v), expected);
            }
        }
    }

    #[test]
    fn addition() {
        let expected = Matrix::from_rows(vec![vec![6, 8], vec![10, 12]]).unwrap();
        assert_eq!(a().add(&b()), Ok(expected.clone()));
        assert_eq!(&a() + &b(), Ok(expected));
    }

    #[test]
    fn addition_commutes() {
        let mut rng = rand::thread_rng();
        for n in 0..6 {
            let x = random(n, &mut rng);
            let y = random(n, &mut rng);
            assert_eq!(x.add(&y), y.add(&x));
        }
    }

    #[test]
    fn mismatched_sizes_fail() {
        let small = a();
        let large = Matrix::sized(3).unwrap();
        assert_eq!(
            small.add(&large),
            Err(MatrixError::SizeMismatch {
                op: Operation::Addition,
                left: 2,
                right: 3,
            })
        );
        assert_eq!(
            &large * &small,
            Err(MatrixError::SizeMismatch {
                op: Operation::Multiplication,
                left: 3,
                right: 2,
            })
        );
    }

    #[test]
    fn multiplication() {
        let expected = Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap();
        assert_eq!(&a() * &b(), Ok(expected));
    }

    #[test]
    fn multiplying_by_identity_is_a_no_op() {
        let mut rng = rand::thread_rng();
        for n in 1..6isize {
            let mut identity = Matrix::sized(n).unwrap();
            for i in 0..n {
                *identity.get_mut(i, i).unwrap() = 1;
            }
            let x = random(n as usize, &mut rng);
            assert_eq!(x.multiply(&identity), Ok(x.clone()));
            assert_eq!(identity.multiply(&x), Ok(x));
        }
    }

    #[test]
    fn overflow_wraps() {
        let x = Matrix::from_rows(vec![vec![i32::MAX]]).unwrap();
        let one = Matrix::from_rows(vec![vec![1]]).unwrap();
        assert_eq!(x.add(&one).unwrap().get(0, 0), Ok(i32::MIN));
    }

    #[test]
    fn diagonal_sums_odd_removes_center() {
        let matrix =
            Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let sums = matrix.diagonal_sums();
        assert_eq!(sums.main, 15);
        assert_eq!(sums.secondary, 10);
        assert_eq!(sums.total(), 25);
    }

    #[test]
    fn diagonal_sums_even_is_unadjusted() {
        let sums = a().diagonal_sums();
        assert_eq!(sums, DiagonalSums { main: 5, secondary: 5 });
    }

    #[test]
    fn diagonal_sums_do_not_overflow() {
        let matrix = Matrix::from_rows(vec![vec![i32::MAX, i32::MAX], vec![i32::MAX, i32::MAX]])
            .unwrap();
        let sums = matrix.diagonal_sums();
        assert_eq!(sums.main, 2 * i64::from(i32::MAX));
        assert_eq!(Matrix::empty().diagonal_sums(), DiagonalSums::default());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(MatrixError::NotSquare {
                expected: 2,
                found: 1
            })
        );
        assert!(Matrix::from_row_major(2, vec![1, 2, 3]).is_err());
    }
}
