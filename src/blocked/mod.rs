//! Blocked (tiled) matrix multiplication, both run straight through and
//! broken into single steps.
//!
//! - `loops`: the six-deep loop nest, used as ground truth
//! - `indexer`: maps a step number back to the loop variables, so a
//!   stepper can jump to any point of the nest

pub mod indexer;
pub mod loops;
