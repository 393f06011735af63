//! Which cells to highlight and where the block arrows point.
//!
//! Everything here is derived from the current [`BlockIndices`] and the
//! matrix a cell belongs to. Nothing is highlighted once the
//! multiplication is complete.

use crate::blocked::indexer::BlockIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixRole {
    A,
    B,
    Result,
}

impl MatrixRole {
    pub const ALL: [MatrixRole; 3] = [MatrixRole::A, MatrixRole::B, MatrixRole::Result];

    pub fn name(&self) -> &'static str {
        match self {
            MatrixRole::A => "A",
            MatrixRole::B => "B",
            MatrixRole::Result => "result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Element read or written by the current step.
    Active,
    /// Inside the tile the current step works on.
    InBlock,
    Plain,
}

/// Arrow next to a row or above a column, marking a block start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockArrow {
    pub label: &'static str,
    pub position: usize,
}

/// Row/column coordinates of the active element and tile start for `role`.
///
/// A is indexed (i, k), B is (k, j), the result is (i, j).
fn axes(role: MatrixRole, idx: &BlockIndices) -> ((usize, usize), (usize, usize)) {
    match role {
        MatrixRole::A => (idx.a_cell(), (idx.i_block, idx.k_block)),
        MatrixRole::B => (idx.b_cell(), (idx.k_block, idx.j_block)),
        MatrixRole::Result => (idx.cell(), (idx.i_block, idx.j_block)),
    }
}

pub fn highlight(
    role: MatrixRole,
    i: usize,
    j: usize,
    idx: Option<&BlockIndices>,
    block: usize,
) -> Highlight {
    let Some(idx) = idx else {
        return Highlight::Plain;
    };
    let (active, (row0, col0)) = axes(role, idx);
    if (i, j) == active {
        Highlight::Active
    } else if (row0..row0 + block).contains(&i) && (col0..col0 + block).contains(&j) {
        Highlight::InBlock
    } else {
        Highlight::Plain
    }
}

/// Row arrow and column arrow for `role`.
pub fn block_arrows(role: MatrixRole, idx: &BlockIndices) -> (BlockArrow, BlockArrow) {
    let (_, (row0, col0)) = axes(role, idx);
    let (row_label, col_label) = match role {
        MatrixRole::A => ("iBlock", "kBlock"),
        MatrixRole::B => ("kBlock", "jBlock"),
        MatrixRole::Result => ("iBlock", "jBlock"),
    };
    (
        BlockArrow {
            label: row_label,
            position: row0,
        },
        BlockArrow {
            label: col_label,
            position: col0,
        },
    )
}
