use tracing::{debug, info};

use super::config::SimConfig;
use super::history::{Delta, History};
use crate::blocked::indexer::{BlockIndices, indices};
use crate::matrix::grid::Matrix;

/// Step-through state of one blocked multiplication.
///
/// Owns the two inputs, the running result and the undo log. The only
/// ways to change it are [`advance`](Self::advance),
/// [`retreat`](Self::retreat), [`reset`](Self::reset) and
/// [`jump_to`](Self::jump_to), which is built on the first two.
///
/// ```
/// use blockstep::SimulationState;
///
/// let mut sim = SimulationState::default();
/// assert!(sim.advance());
/// assert_eq!(sim.result()[(0, 0)], 2); // A[0][0] * B[0][0] = 1 * 2
/// assert!(sim.retreat());
/// assert!(!sim.retreat()); // already at step 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    config: SimConfig,
    a: Matrix,
    b: Matrix,
    result: Matrix,
    step: usize,
    history: History,
}

impl SimulationState {
    pub fn new(config: SimConfig) -> Self {
        let n = config.n();
        Self {
            config,
            a: Matrix::seeded_a(n),
            b: Matrix::seeded_b(n),
            result: Matrix::zeros(n),
            step: 0,
            history: History::new(n),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.config.total_steps()
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.total_steps()
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn result(&self) -> &Matrix {
        &self.result
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Loop variables for the update the next `advance` would apply.
    ///
    /// `None` once the multiplication is complete.
    pub fn current_indices(&self) -> Option<BlockIndices> {
        if self.is_complete() {
            return None;
        }
        Some(indices(self.step, self.config.n(), self.config.block()))
    }

    /// Apply one multiply-add. Returns `false` (and changes nothing) when
    /// already complete.
    pub fn advance(&mut self) -> bool {
        let Some(idx) = self.current_indices() else {
            debug!(step = self.step, "advance ignored: multiplication complete");
            return false;
        };

        let added = self.a[idx.a_cell()] * self.b[idx.b_cell()];
        let (row, col) = idx.cell();
        let delta = Delta { row, col, added };
        delta.apply(&mut self.result);
        self.step = self.history.push(delta);

        debug!(
            step = self.step,
            i2 = idx.i2,
            k2 = idx.k2,
            j2 = idx.j2,
            added,
            "advanced"
        );
        if self.is_complete() {
            info!(steps = self.step, "multiplication complete");
        }
        true
    }

    /// Undo the latest `advance`. Returns `false` (and changes nothing) at
    /// step 0.
    pub fn retreat(&mut self) -> bool {
        let Some(delta) = self.history.pop() else {
            debug!("retreat ignored: already at step 0");
            return false;
        };

        delta.revert(&mut self.result);
        self.step = self.history.last_step();
        debug!(step = self.step, row = delta.row, col = delta.col, "retreated");
        true
    }

    /// Back to step 0 with an empty result.
    pub fn reset(&mut self) {
        self.step = 0;
        self.result = Matrix::zeros(self.config.n());
        self.history.reset();
        info!("reset");
    }

    /// Move to `target` (clamped to the last step). Returns how many
    /// transitions were made.
    pub fn jump_to(&mut self, target: usize) -> usize {
        let target = target.min(self.total_steps());
        let mut moves = 0;
        while self.step < target && self.advance() {
            moves += 1;
        }
        while self.step > target && self.retreat() {
            moves += 1;
        }
        moves
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ikj::product;

    fn run_to_end(sim: &mut SimulationState) {
        while sim.advance() {}
    }

    #[test]
    fn fresh_state_is_empty() {
        let sim = SimulationState::default();
        assert_eq!(sim.step(), 0);
        assert_eq!(sim.total_steps(), 64);
        assert_eq!(sim.result(), &Matrix::zeros(4));
        assert_eq!(sim.history().len(), 1);
        assert!(!sim.is_complete());
    }

    #[test]
    fn first_advance_multiplies_corners() {
        let mut sim = SimulationState::default();
        assert_eq!(sim.current_indices(), Some(indices(0, 4, 2)));
        assert!(sim.advance());
        assert_eq!(sim.step(), 1);
        assert_eq!(sim.result()[(0, 0)], 2);
        assert_eq!(sim.history().len(), 2);
    }

    #[test]
    fn full_run_matches_product() {
        let mut sim = SimulationState::default();
        run_to_end(&mut sim);

        assert_eq!(sim.step(), 64);
        assert!(sim.is_complete());
        assert_eq!(sim.current_indices(), None);
        assert_eq!(sim.result(), &product(sim.a(), sim.b()));
    }

    #[test]
    fn advance_at_end_is_noop() {
        let mut sim = SimulationState::default();
        run_to_end(&mut sim);
        let before = sim.clone();

        assert!(!sim.advance());
        assert_eq!(sim, before);
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut sim = SimulationState::default();
        let before = sim.clone();

        assert!(!sim.retreat());
        assert_eq!(sim, before);
    }

    #[test]
    fn history_tracks_step() {
        let mut sim = SimulationState::default();
        for _ in 0..20 {
            sim.advance();
        }
        for _ in 0..7 {
            sim.retreat();
        }
        assert_eq!(sim.step(), 13);
        assert_eq!(sim.history().len(), sim.step() + 1);
        let snap = sim.history().snapshot(sim.step());
        assert_eq!(snap.as_ref(), Some(sim.result()));
        for (k, entry) in sim.history().entries().iter().enumerate() {
            assert_eq!(entry.step, k);
        }
    }

    #[test]
    fn reset_matches_fresh_state() {
        let mut sim = SimulationState::default();
        for _ in 0..30 {
            sim.advance();
        }
        sim.retreat();
        sim.reset();
        assert_eq!(sim, SimulationState::default());
    }

    #[test]
    fn jump_to_clamps_and_counts() {
        let mut sim = SimulationState::default();
        assert_eq!(sim.jump_to(10), 10);
        assert_eq!(sim.step(), 10);
        assert_eq!(sim.jump_to(4), 6);
        assert_eq!(sim.step(), 4);
        assert_eq!(sim.jump_to(1000), 60);
        assert!(sim.is_complete());
        assert_eq!(sim.jump_to(64), 0);
    }

    #[test]
    fn other_sizes_reach_product() {
        for (n, block) in [(2, 1), (3, 3), (6, 2), (6, 3), (8, 4)] {
            let mut sim = SimulationState::new(SimConfig::new(n, block).unwrap());
            run_to_end(&mut sim);
            assert_eq!(sim.step(), n * n * n);
            assert_eq!(sim.result(), &product(sim.a(), sim.b()), "n={} block={}", n, block);
        }
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            /// k advances then k retreats leaves the state untouched.
            #[test]
            fn retreat_inverts_advance(start in 0usize..=64, k in 0usize..=64) {
                let mut sim = SimulationState::default();
                sim.jump_to(start);
                let before = sim.clone();

                let advanced = (0..k).filter(|_| sim.advance()).count();
                for _ in 0..advanced {
                    prop_assert!(sim.retreat());
                }
                prop_assert_eq!(sim, before);
            }

            /// Any mix of operations keeps history in step with the result.
            #[test]
            fn history_invariant_holds(ops in proptest::collection::vec(0u8..3, 0..200)) {
                let mut sim = SimulationState::default();
                for op in ops {
                    match op {
                        0 => { sim.advance(); }
                        1 => { sim.retreat(); }
                        _ => if sim.step() % 5 == 4 { sim.reset(); } else { sim.advance(); },
                    }
                    prop_assert_eq!(sim.history().len(), sim.step() + 1);
                    prop_assert!(sim.step() <= sim.total_steps());
                }
                let snap = sim.history().snapshot(sim.step());
                prop_assert_eq!(snap.as_ref(), Some(sim.result()));
            }
        }
    }
}
