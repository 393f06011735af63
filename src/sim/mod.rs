//! Stepping state machine.
//!
//! - `config`: validated matrix/block size
//! - `history`: undo log of scalar updates
//! - `state`: `SimulationState` with advance, retreat, reset

pub mod config;
pub mod history;
pub mod state;
