//! Matrix and block size for a simulation.

use thiserror::Error;

/// Matrix dimension used when nothing else is asked for.
pub const DEFAULT_N: usize = 4;
/// Block size used when nothing else is asked for.
pub const DEFAULT_BLOCK: usize = 2;
/// Largest accepted matrix dimension.
///
/// Keeps `n³` steps within `usize`, three `n*n` matrices small, and the
/// largest result entry (about `2·n⁵`) within `i64`.
pub const MAX_N: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("matrix size must be > 0")]
    EmptyMatrix,
    #[error("block size must be > 0")]
    ZeroBlock,
    #[error("matrix size {n} is not divisible by block size {block}")]
    NotDivisible { n: usize, block: usize },
    #[error("matrix size {n} is too large (max {max})", max = MAX_N)]
    TooLarge { n: usize },
}

/// Whether the step count and every result entry fit their integer types.
fn fits(n: usize) -> bool {
    if n > MAX_N || n.checked_pow(3).is_none() {
        return false;
    }
    i64::try_from(n)
        .ok()
        .and_then(|n| n.checked_pow(5))
        .and_then(|v| v.checked_mul(2))
        .is_some()
}

/// Validated (N, B) pair: `0 < n <= MAX_N`, `block > 0`, `n % block == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    n: usize,
    block: usize,
}

impl SimConfig {
    pub fn new(n: usize, block: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyMatrix);
        }
        if block == 0 {
            return Err(ConfigError::ZeroBlock);
        }
        if n % block != 0 {
            return Err(ConfigError::NotDivisible { n, block });
        }
        if !fits(n) {
            return Err(ConfigError::TooLarge { n });
        }
        Ok(Self { n, block })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn block(&self) -> usize {
        self.block
    }

    pub fn total_steps(&self) -> usize {
        crate::blocked::indexer::total_steps(self.n, self.block)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            block: DEFAULT_BLOCK,
        }
    }
}
