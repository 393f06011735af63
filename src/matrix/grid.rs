//! Square integer matrix used for the inputs and the accumulator.

use std::fmt;
use std::ops::{Index, IndexMut};

/// N×N matrix of `i64`, stored row-major.
///
/// Indexing takes `(row, col)` pairs:
///
/// ```
/// use blockstep::Matrix;
///
/// let a = Matrix::seeded_a(4);
/// assert_eq!(a[(0, 0)], 1);
/// assert_eq!(a[(1, 2)], 7); // 1*4 + 2 + 1
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// All-zero N×N matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Build from a row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_row_major(n: usize, data: Vec<i64>) -> Self {
        assert_eq!(data.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
        Self { n, data }
    }

    /// Left input: `A[i][j] = i*N + j + 1`.
    pub fn seeded_a(n: usize) -> Self {
        let data = (0..n * n).map(|idx| idx as i64 + 1).collect();
        Self { n, data }
    }

    /// Right input: `B[i][j] = 2 * A[i][j]`.
    pub fn seeded_b(n: usize) -> Self {
        let data = (0..n * n).map(|idx| 2 * (idx as i64 + 1)).collect();
        Self { n, data }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.n.max(1))
    }

    /// Widest value when printed, used to align rendered grids.
    pub fn max_width(&self) -> usize {
        self.data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        &mut self.data[i * self.n + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_width();
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_inputs_follow_formula() {
        let n = 4;
        let a = Matrix::seeded_a(n);
        let b = Matrix::seeded_b(n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(a[(i, j)], (i * n + j + 1) as i64);
                assert_eq!(b[(i, j)], 2 * a[(i, j)]);
            }
        }
    }

    #[test]
    fn index_mut_writes_row_major() {
        let mut m = Matrix::zeros(3);
        m[(1, 2)] += 9;
        assert_eq!(m.as_slice()[5], 9);
        assert_eq!(m.rows().nth(1), Some(&[0, 0, 9][..]));
    }

    #[test]
    #[should_panic(expected = "expected 2x2=4 elements")]
    fn from_row_major_checks_length() {
        Matrix::from_row_major(2, vec![1, 2, 3]);
    }

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::from_row_major(2, vec![1, 20, 300, 4]);
        assert_eq!(m.to_string(), "  1  20\n300   4\n");
    }
}
