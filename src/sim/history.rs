//! Undo log for the stepper.
//!
//! Each advance adds exactly one value to one result cell, so the log
//! keeps that `(cell, value)` pair instead of a copy of the whole matrix.
//! Undoing subtracts it again; integer addition makes that exact.

use crate::matrix::grid::Matrix;

/// One scalar update: `result[row][col] += added`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub row: usize,
    pub col: usize,
    pub added: i64,
}

impl Delta {
    pub fn apply(&self, m: &mut Matrix) {
        m[(self.row, self.col)] += self.added;
    }

    pub fn revert(&self, m: &mut Matrix) {
        m[(self.row, self.col)] -= self.added;
    }
}

/// State reached at `step`. The initial entry has no delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub step: usize,
    pub delta: Option<Delta>,
}

/// Entries for steps `0..=current`, in order.
///
/// Never empty: the step 0 entry survives every `pop` and `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    n: usize,
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            entries: vec![HistoryEntry {
                step: 0,
                delta: None,
            }],
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Step of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Record the update that produced the next step. Returns that step.
    pub fn push(&mut self, delta: Delta) -> usize {
        let step = self.entries.len();
        self.entries.push(HistoryEntry {
            step,
            delta: Some(delta),
        });
        step
    }

    /// Drop the newest entry and hand back its delta.
    ///
    /// Returns `None` when only the initial entry is left.
    pub fn pop(&mut self) -> Option<Delta> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop().and_then(|entry| entry.delta)
    }

    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }

    /// Result matrix as it was at `step`, rebuilt by replaying deltas.
    pub fn snapshot(&self, step: usize) -> Option<Matrix> {
        let upto = self.entries.get(..=step)?;
        let mut m = Matrix::zeros(self.n);
        for delta in upto.iter().filter_map(|entry| entry.delta) {
            delta.apply(&mut m);
        }
        Some(m)
    }
}
