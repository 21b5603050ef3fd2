//! Bi-objective TSP instance: city count plus two distance matrices.
//!
//! The text format consumed by [`TspInstance::parse`]:
//!
//! ```text
//! <num_cities>
//! <num_objectives>          (expected 2; value is not checked)
//! <row 0 of matrix A>       (num_cities whitespace-separated reals)
//! ...
//! <row N-1 of matrix A>
//!                           (blank separator line)
//! <row 0 of matrix B>
//! ...
//! <row N-1 of matrix B>
//! ```
//!
//! Parsing validates dimensions and numeric tokens so the search engines
//! never see a malformed matrix.

use std::fs;
use std::path::Path;

/// A bi-objective TSP instance.
///
/// Both matrices are `num_cities x num_cities`; entry `[i][j]` is the cost
/// of traveling from city `i` to city `j` under the respective objective.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspInstance {
    /// Number of cities `N`. Tours are permutations of `0..N`.
    pub num_cities: usize,

    /// Distance matrix for the first objective.
    pub matrix_a: Vec<Vec<f64>>,

    /// Distance matrix for the second objective.
    pub matrix_b: Vec<Vec<f64>>,
}

impl TspInstance {
    /// Builds an instance from two pre-loaded square matrices.
    ///
    /// Returns `Err` if the matrices are empty, non-square, or disagree
    /// in size.
    pub fn from_matrices(
        matrix_a: Vec<Vec<f64>>,
        matrix_b: Vec<Vec<f64>>,
    ) -> Result<Self, String> {
        let n = matrix_a.len();
        if n == 0 {
            return Err("instance must have at least one city".into());
        }
        if matrix_b.len() != n {
            return Err(format!(
                "matrix size mismatch: A is {}x{}, B has {} rows",
                n,
                n,
                matrix_b.len()
            ));
        }
        for (i, row) in matrix_a.iter().chain(matrix_b.iter()).enumerate() {
            if row.len() != n {
                return Err(format!(
                    "matrix row {} has {} columns, expected {}",
                    i % n,
                    row.len(),
                    n
                ));
            }
        }
        Ok(Self {
            num_cities: n,
            matrix_a,
            matrix_b,
        })
    }

    /// Reads and parses an instance file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read instance {}: {e}", path.display()))?;
        Self::parse(&text)
    }

    /// Parses instance text in the two-matrix format described in the
    /// module docs.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut lines = text.lines();

        let num_cities: usize = next_nonmissing(&mut lines, "city count")?
            .trim()
            .parse()
            .map_err(|_| "city count line is not an integer".to_string())?;
        if num_cities == 0 {
            return Err("instance must have at least one city".into());
        }

        // Objective count line: must be an integer, value unchecked.
        next_nonmissing(&mut lines, "objective count")?
            .trim()
            .parse::<usize>()
            .map_err(|_| "objective count line is not an integer".to_string())?;

        let matrix_a = parse_matrix(&mut lines, num_cities, "A")?;

        // Blank separator between the two matrices.
        match lines.next() {
            Some(sep) if sep.trim().is_empty() => {}
            Some(sep) => {
                return Err(format!(
                    "expected blank separator between matrices, found {sep:?}"
                ))
            }
            None => return Err("missing separator and matrix B".into()),
        }

        let matrix_b = parse_matrix(&mut lines, num_cities, "B")?;

        Self::from_matrices(matrix_a, matrix_b)
    }
}

fn next_nonmissing<'a, I: Iterator<Item = &'a str>>(
    lines: &mut I,
    what: &str,
) -> Result<&'a str, String> {
    lines.next().ok_or_else(|| format!("missing {what} line"))
}

fn parse_matrix<'a, I: Iterator<Item = &'a str>>(
    lines: &mut I,
    n: usize,
    name: &str,
) -> Result<Vec<Vec<f64>>, String> {
    let mut matrix = Vec::with_capacity(n);
    for r in 0..n {
        let line = lines
            .next()
            .ok_or_else(|| format!("matrix {name}: missing row {r}"))?;
        let row: Vec<f64> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| format!("matrix {name}, row {r}: non-numeric token {tok:?}"))
            })
            .collect::<Result<_, _>>()?;
        if row.len() != n {
            return Err(format!(
                "matrix {name}, row {r}: expected {n} values, found {}",
                row.len()
            ));
        }
        matrix.push(row);
    }
    Ok(matrix)
}
