//! The blocked loop nest itself, run straight through.

/// Blocked matrix multiplication: C += A * B, all `n`×`n`, row-major.
///
/// Six nested loops: three walk the tiles, three walk the elements
/// inside one tile. The element loops use i-k-j order so B and C are
/// read along rows.
///
/// # Panics
///
/// Panics if `block` is zero or does not divide `n`, or if a slice length
/// does not match `n * n`.
pub fn matmul_blocked(a: &[i64], b: &[i64], c: &mut [i64], n: usize, block: usize) {
    assert!(block > 0 && n % block == 0, "{} is not divisible by {}", n, block);
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for_each_step(n, block, |i2, k2, j2| {
        c[i2 * n + j2] += a[i2 * n + k2] * b[k2 * n + j2];
    });
}

/// Order in which the loop nest visits `(i2, k2, j2)`.
pub fn block_order(n: usize, block: usize) -> Vec<(usize, usize, usize)> {
    let mut order = Vec::with_capacity(n * n * n);
    for_each_step(n, block, |i2, k2, j2| order.push((i2, k2, j2)));
    order
}

fn for_each_step<F>(n: usize, block: usize, mut body: F)
where
    F: FnMut(usize, usize, usize),
{
    // Tile loops
    for i_block in (0..n).step_by(block) {
        for j_block in (0..n).step_by(block) {
            for k_block in (0..n).step_by(block) {
                // Element loops inside one tile
                for i2 in i_block..i_block + block {
                    for k2 in k_block..k_block + block {
                        for j2 in j_block..j_block + block {
                            body(i2, k2, j2);
                        }
                    }
                }
            }
        }
    }
}
