//! Terminal rendering of the stepper.
//!
//! Reads a [`SimulationState`](crate::sim::state::SimulationState) and
//! never mutates it; highlight rules live here rather than in the core.

pub mod frame;
pub mod highlight;
