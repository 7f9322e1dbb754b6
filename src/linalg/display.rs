use std::{fmt, str::FromStr};

use regex::Regex;

use super::{
    error::{MatrixError, Result},
    Matrix,
};

const EMPTY: &str = "(empty)";

// "<label> (NxN):"
const LABEL_PATTERN: &str = r"^(?P<label>.*) \((?P<rows>\d+)x(?P<cols>\d+)\):$";

impl Matrix {
    /// Renders the matrix as a right-aligned grid, preceded by a
    /// `"<label> (NxN):"` line when `label` is non-empty.
    ///
    /// Every column is as wide as the longest element, sign included.
    pub fn format(&self, label: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            out += &format!("{} ({}x{}):\n", label, self.size(), self.size());
        }
        out += &self.to_string();
        out
    }

    fn column_width(&self) -> usize {
        self.as_slice()
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", EMPTY);
        }
        let width = self.column_width();
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses the text produced by [`Matrix::format`]. A leading label line is
/// skipped, but its declared dimension must agree with the grid.
impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let label = Regex::new(LABEL_PATTERN).map_err(|e| MatrixError::Parse(e.to_string()))?;

        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

        let mut declared = None;
        if let Some(captures) = lines.peek().copied().and_then(|line| label.captures(line)) {
            let rows: usize = captures["rows"]
                .parse()
                .map_err(|_| MatrixError::Parse(format!("bad dimension in `{}`", &captures[0])))?;
            if captures["rows"] != captures["cols"] {
                return Err(MatrixError::Parse(format!(
                    "label declares a non-square matrix: `{}`",
                    &captures[0]
                )));
            }
            declared = Some(rows);
            lines.next();
        }

        let matrix = if lines.peek() == Some(&EMPTY) {
            lines.next();
            Matrix::empty()
        } else {
            let rows = lines
                .by_ref()
                .map(|line| {
                    line.split_whitespace()
                        .map(|token| {
                            token.parse::<i32>().map_err(|_| {
                                MatrixError::Parse(format!("`{}` is not an integer", token))
                            })
                        })
                        .collect::<Result<Vec<i32>>>()
                })
                .collect::<Result<Vec<Vec<i32>>>>()?;
            Matrix::from_rows(rows)?
        };

        if let Some(line) = lines.next() {
            return Err(MatrixError::Parse(format!("unexpected trailing line `{}`", line)));
        }

        match declared {
            Some(n) if n != matrix.size() => Err(MatrixError::Parse(format!(
                "label declares {n}x{n} but the grid is {}x{}",
                matrix.size(),
                matrix.size()
            ))),
            _ => Ok(matrix),
        }
    }
}
