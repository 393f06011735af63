//! Matrix storage and the naive reference product.
//!
//! The stepper only ever needs square integer matrices, so `Matrix` is a
//! thin row-major wrapper rather than a general tensor type.

pub mod grid;
pub mod naive_ikj;
