//! Step counter → loop indices.
//!
//! The blocked loop nest runs
//!
//! ```text
//! for iBlock, for jBlock, for kBlock {
//!     for i2, for k2, for j2 {
//!         res[i2][j2] += A[i2][k2] * B[k2][j2];
//!     }
//! }
//! ```
//!
//! and every pass through the innermost body is one step. Given the step
//! number we can recover all six loop variables with divisions and
//! remainders, without replaying the loops.

/// Loop variables of the blocked nest at one step.
///
/// Block starts are element indices (multiples of the block size), not
/// block numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockIndices {
    pub i_block: usize,
    pub j_block: usize,
    pub k_block: usize,
    pub i2: usize,
    pub j2: usize,
    pub k2: usize,
}

impl BlockIndices {
    /// Result cell written at this step.
    pub fn cell(&self) -> (usize, usize) {
        (self.i2, self.j2)
    }

    /// Element of A read at this step.
    pub fn a_cell(&self) -> (usize, usize) {
        (self.i2, self.k2)
    }

    /// Element of B read at this step.
    pub fn b_cell(&self) -> (usize, usize) {
        (self.k2, self.j2)
    }
}

/// Number of steps to finish an `n`×`n` product with `block`×`block` tiles.
///
/// Always `n³`; blocking only reorders the work.
pub fn total_steps(n: usize, block: usize) -> usize {
    let num_blocks = n / block;
    num_blocks.pow(3) * block.pow(3)
}

/// Decompose `step` into the six loop variables.
///
/// Caller must ensure `block` divides `n` and `step < total_steps(n, block)`.
/// The terminal step has no active tuple.
///
/// ```
/// use blockstep::blocked::indexer::indices;
///
/// let idx = indices(13, 4, 2);
/// assert_eq!((idx.i_block, idx.j_block, idx.k_block), (0, 0, 2));
/// assert_eq!((idx.i2, idx.k2, idx.j2), (1, 2, 1));
/// ```
pub fn indices(step: usize, n: usize, block: usize) -> BlockIndices {
    debug_assert!(block > 0 && n % block == 0, "{} is not divisible by {}", n, block);
    debug_assert!(
        step < total_steps(n, block),
        "step {} out of range for {}x{} with block {}",
        step,
        n,
        n,
        block
    );

    let num_blocks = n / block;

    // Innermost j2 advances every step.
    let steps_per_k2 = block;
    let steps_per_i2 = block * block;
    let steps_per_block_body = block * block * block;

    let steps_per_k_block = steps_per_block_body;
    let steps_per_j_block = num_blocks * steps_per_k_block;
    let steps_per_i_block = num_blocks * steps_per_j_block;

    let i_block = (step / steps_per_i_block) * block;
    let j_block = ((step / steps_per_j_block) % num_blocks) * block;
    let k_block = ((step / steps_per_k_block) % num_blocks) * block;

    let offset = step % steps_per_block_body;
    let i2 = i_block + offset / steps_per_i2;
    let k2 = k_block + (offset % steps_per_i2) / steps_per_k2;
    let j2 = j_block + offset % steps_per_k2;

    BlockIndices {
        i_block,
        j_block,
        k_block,
        i2,
        j2,
        k2,
    }
}
