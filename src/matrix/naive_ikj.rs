use super::grid::Matrix;

/// Reference matrix multiplication using i-k-j loop order.
///
/// No blocking, no stepping. The stepper and the blocked loop nest are
/// both checked against this.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ikj(a: &[i64], b: &[i64], c: &mut [i64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            for j in 0..n {
                c[i * n + j] += a_ip * b[p * n + j];
            }
        }
    }
}

/// `A × B` for two square matrices of the same size.
///
/// # Panics
///
/// Panics if the sizes differ.
pub fn product(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.n(), b.n(), "A is {0}x{0} but B is {1}x{1}", a.n(), b.n());
    let n = a.n();
    let mut c = Matrix::zeros(n);
    matmul_naive_ikj(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, n, n);
    c
}
