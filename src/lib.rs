//! Step through blocked matrix multiplication one multiply-add at a time.
//!
//! I built this to see what cache blocking actually does to the order of
//! work. The loop nest walks the matrices tile by tile; this crate turns
//! every pass through its innermost body into a step you can go forward
//! and back over, and renders which cells each step touches.
//!
//! ## Usage
//!
//! ```
//! use blockstep::{SimConfig, SimulationState};
//!
//! let mut sim = SimulationState::new(SimConfig::new(4, 2).unwrap());
//! while sim.advance() {}
//!
//! assert_eq!(sim.step(), 64);
//! assert_eq!(sim.result(), &blockstep::product(sim.a(), sim.b()));
//! ```
//!
//! Jumping around and undoing:
//!
//! ```
//! use blockstep::SimulationState;
//!
//! let mut sim = SimulationState::default();
//! sim.jump_to(13);
//! let idx = sim.current_indices().unwrap();
//! assert_eq!((idx.i2, idx.k2, idx.j2), (1, 2, 1));
//!
//! sim.retreat();
//! assert_eq!(sim.step(), 12);
//! ```
//!
//! ## What's inside
//!
//! - Step → loop-index decomposition for any N divisible by the block size
//! - The blocked loop nest itself, as ground truth
//! - A stepper with exact undo (one scalar delta per step)
//! - Plain-text / ANSI rendering of A, B and the result with the active tile

pub mod blocked;
pub mod matrix;
pub mod render;
pub mod sim;
pub mod trace;

pub use blocked::indexer::{BlockIndices, indices, total_steps};
pub use blocked::loops::matmul_blocked;
pub use matrix::grid::Matrix;
pub use matrix::naive_ikj::{matmul_naive_ikj, product};
pub use render::frame::{RenderOptions, render_frame};
pub use sim::config::{ConfigError, SimConfig};
pub use sim::state::SimulationState;
