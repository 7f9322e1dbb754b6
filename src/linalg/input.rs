use std::{fs::File, io::Read, path::Path};

use log::{debug, info};

use super::{
    error::{MatrixError, Result},
    Matrix,
};

pub type NomResult<I, O> = nom::IResult<I, O, nom::error::VerboseError<I>>;

/// Reads matrices `A` and `B` from a whitespace separated file: the
/// dimension `N`, then `N*N` values of `A` and `N*N` values of `B`, both
/// row-major. Anything after `B` is ignored.
pub fn read_matrices<P: AsRef<Path>>(path: P) -> Result<(Matrix, Matrix)> {
    let path = path.as_ref();

    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| {
            MatrixError::ReadFailure(format!("could not open file `{}`: {}", path.display(), e))
        })?;

    let (a, b) = parse_matrices(&contents)?;
    info!("loaded two {0}x{0} matrices from {1}", a.size(), path.display());
    Ok((a, b))
}

pub fn parse_matrices(contents: &str) -> Result<(Matrix, Matrix)> {
    let (i, n) = dimension(contents)
        .map_err(|_| MatrixError::ReadFailure(String::from("invalid size")))?;
    debug!("input declares dimension {}", n);

    // Every value needs at least two bytes, so this also bounds the allocation
    let len = n
        .checked_mul(n)
        .filter(|&len| len <= contents.len())
        .ok_or_else(|| {
            MatrixError::ReadFailure(format!("a {n}x{n} matrix cannot fit in the input"))
        })?;

    let (i, a) = values(len)(i).map_err(|e| read_failure(contents, "matrix A", len, e))?;
    let (_, b) = values(len)(i).map_err(|e| read_failure(contents, "matrix B", len, e))?;

    Ok((Matrix::from_row_major(n, a)?, Matrix::from_row_major(n, b)?))
}

// Positive leading integer
fn dimension(i: &str) -> NomResult<&str, usize> {
    use nom::{
        character::complete::{multispace0, u64},
        combinator::{map_res, verify},
        sequence::preceded,
    };

    map_res(
        verify(preceded(multispace0, u64), |&n: &u64| n > 0),
        usize::try_from,
    )(i)
}

// Exactly `len` integers, each preceded by whitespace
fn values<'a>(len: usize) -> impl FnMut(&'a str) -> NomResult<&'a str, Vec<i32>> {
    use nom::{
        character::complete::{i32, multispace1},
        multi::count,
        sequence::preceded,
    };

    count(preceded(multispace1, i32), len)
}

fn read_failure(
    contents: &str,
    what: &str,
    len: usize,
    err: nom::Err<nom::error::VerboseError<&str>>,
) -> MatrixError {
    use nom::{
        Err::{Error, Failure, Incomplete},
        Offset,
    };

    let position = match err {
        Error(err) | Failure(err) => err
            .errors
            .first()
            .map(|(error_slice, _)| contents.offset(error_slice)),
        Incomplete(_) => None,
    };

    let mut message = format!("expected {} values for {}", len, what);
    if let Some(position) = position {
        message += &format!(" (stopped at position {})", position);
    }
    MatrixError::ReadFailure(message)
}
