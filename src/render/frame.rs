//! Plain-text frame of the whole visualization.

use super::highlight::{BlockArrow, Highlight, MatrixRole, block_arrows, highlight};
use crate::blocked::indexer::BlockIndices;
use crate::matrix::grid::Matrix;
use crate::sim::state::SimulationState;

/// The loop nest being stepped through, printed under the matrices.
pub const LOOP_NEST: &str = "\
for (iBlock = 0; iBlock < N; iBlock += blockSize)
  for (jBlock = 0; jBlock < N; jBlock += blockSize)
    for (kBlock = 0; kBlock < N; kBlock += blockSize)
      // Multiply the sub-block (i2, j2, k2)
      for (i2 = iBlock; i2 < iBlock + blockSize; i2++)
        for (k2 = kBlock; k2 < kBlock + blockSize; k2++)
          for (j2 = jBlock; j2 < jBlock + blockSize; j2++)
            res[i2][j2] += A[i2][k2] * B[k2][j2];";

// Room for "iBlock→ " in front of each row
const GUTTER: usize = 8;
// Space between the three matrices
const GAP: usize = 4;

const RESET: &str = "\x1b[0m";
const BG_BLUE: &str = "\x1b[44m";
const BG_RED: &str = "\x1b[41m";
const BG_GREY: &str = "\x1b[100m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// ANSI background colours instead of `[ ]` / `( )` markers.
    pub color: bool,
    pub show_loops: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            show_loops: true,
        }
    }
}

/// A rendered line plus its width on screen (escape codes excluded).
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn blank() -> Self {
        Self {
            text: String::new(),
            width: 0,
        }
    }

    fn at(offset: usize, s: &str) -> Self {
        Self {
            text: format!("{:offset$}{}", "", s),
            width: offset + s.chars().count(),
        }
    }
}

fn style_cell(value: i64, width: usize, h: Highlight, role: MatrixRole, color: bool) -> String {
    if color {
        let bg = match (h, role) {
            (Highlight::Active, MatrixRole::Result) => BG_RED,
            (Highlight::Active, _) => BG_BLUE,
            (Highlight::InBlock, _) => BG_GREY,
            (Highlight::Plain, _) => return format!(" {:>width$} ", value),
        };
        return format!("{} {:>width$} {}", bg, value, RESET);
    }
    let (open, close) = match h {
        Highlight::Active => ('[', ']'),
        Highlight::InBlock => ('(', ')'),
        Highlight::Plain => (' ', ' '),
    };
    format!("{}{:>width$}{}", open, value, close)
}

fn render_matrix(
    role: MatrixRole,
    m: &Matrix,
    idx: Option<&BlockIndices>,
    block: usize,
    width: usize,
    color: bool,
) -> Vec<Line> {
    let stride = width + 3;
    let arrows = idx.map(|idx| block_arrows(role, idx));

    let mut lines = vec![Line::at(GUTTER, role.name())];
    match arrows {
        Some((_, BlockArrow { label, position })) => {
            let offset = GUTTER + position * stride;
            lines.push(Line::at(offset, label));
            lines.push(Line::at(offset + 1 + width / 2, "↓"));
        }
        None => {
            lines.push(Line::blank());
            lines.push(Line::blank());
        }
    }

    for (i, row) in m.rows().enumerate() {
        let prefix = match arrows {
            Some((row_arrow, _)) if row_arrow.position == i => format!("{:<6}→ ", row_arrow.label),
            _ => " ".repeat(GUTTER),
        };
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(j, &v)| style_cell(v, width, highlight(role, i, j, idx, block), role, color))
            .collect();
        let n = row.len();
        lines.push(Line {
            text: format!("{}{}", prefix, cells.join(" ")),
            width: GUTTER + n * (width + 2) + n.saturating_sub(1),
        });
    }
    lines
}

/// Lay the matrix columns out next to each other.
fn side_by_side(columns: Vec<Vec<Line>>) -> Vec<String> {
    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|l| l.width).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            let mut out = String::new();
            for (col, &w) in columns.iter().zip(&widths) {
                let (text, used) = col.get(row).map_or(("", 0), |l| (l.text.as_str(), l.width));
                out.push_str(text);
                out.push_str(&" ".repeat(w - used + GAP));
            }
            out.trim_end().to_string()
        })
        .collect()
}

/// Text describing the current step, or completion.
pub fn status_lines(sim: &SimulationState) -> Vec<String> {
    let mut out = Vec::new();
    match sim.current_indices() {
        Some(idx) => {
            let (i2, j2, k2) = (idx.i2, idx.j2, idx.k2);
            out.push(format!(
                "res[{i2}][{j2}] += A[{i2}][{k2}] * B[{k2}][{j2}]    ({} * {})",
                sim.a()[idx.a_cell()],
                sim.b()[idx.b_cell()]
            ));
            out.push(format!("i2: {i2}  k2: {k2}  j2: {j2}"));
        }
        None => out.push("Multiplication complete".to_string()),
    }
    out.push(format!("Step {} of {}", sim.step(), sim.total_steps()));
    out
}

/// Render matrices, highlights, status and (optionally) the loop nest.
pub fn render_frame(sim: &SimulationState, opts: &RenderOptions) -> String {
    let cfg = sim.config();
    let idx = sim.current_indices();
    let width = [sim.a(), sim.b(), sim.result()]
        .iter()
        .map(|m| m.max_width())
        .max()
        .unwrap_or(1);

    let columns: Vec<Vec<Line>> = MatrixRole::ALL
        .iter()
        .map(|&role| {
            let m = match role {
                MatrixRole::A => sim.a(),
                MatrixRole::B => sim.b(),
                MatrixRole::Result => sim.result(),
            };
            render_matrix(role, m, idx.as_ref(), cfg.block(), width, opts.color)
        })
        .collect();

    let mut out = vec![format!(
        "Blocked matrix multiplication: {n}x{n}, block size {}",
        cfg.block(),
        n = cfg.n()
    )];
    out.push(String::new());
    out.extend(side_by_side(columns));
    out.push(String::new());
    out.extend(status_lines(sim));
    if opts.show_loops {
        out.push(String::new());
        out.push(LOOP_NEST.to_string());
    }

    let mut frame = out.join("\n");
    frame.push('\n');
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            show_loops: false,
        }
    }

    #[test]
    fn first_frame_marks_active_and_block_cells() {
        let sim = SimulationState::default();
        let frame = render_frame(&sim, &plain());

        assert!(frame.contains("[ 1]"), "{}", frame);
        assert!(frame.contains("( 2)"), "{}", frame);
        assert!(frame.contains("[ 0]"), "{}", frame);
        assert!(frame.contains("iBlock→"), "{}", frame);
        assert!(frame.contains("kBlock"), "{}", frame);
        assert!(frame.contains("res[0][0] += A[0][0] * B[0][0]"), "{}", frame);
        assert!(frame.contains("Step 0 of 64"), "{}", frame);
    }

    #[test]
    fn complete_frame_has_no_highlights() {
        let mut sim = SimulationState::default();
        sim.jump_to(sim.total_steps());
        let frame = render_frame(&sim, &plain());

        assert!(frame.contains("Multiplication complete"));
        assert!(frame.contains("Step 64 of 64"));
        assert!(!frame.contains('['), "{}", frame);
        assert!(!frame.contains('('), "{}", frame);
        assert!(!frame.contains('→'), "{}", frame);
    }

    #[test]
    fn rows_line_up_across_matrices() {
        let sim = SimulationState::default();
        let frame = render_frame(&sim, &plain());
        let lines: Vec<&str> = frame.lines().collect();
        // header, blank, title, label, arrow, then the first matrix row
        let first_row = lines[5];
        let second_row = lines[6];
        assert!(first_row.starts_with("iBlock→ [ 1] ( 2)"), "{:?}", first_row);
        assert!(second_row.starts_with("        ( 5) ( 6)"), "{:?}", second_row);
    }

    #[test]
    fn color_uses_escape_codes() {
        let sim = SimulationState::default();
        let frame = render_frame(
            &sim,
            &RenderOptions {
                color: true,
                show_loops: true,
            },
        );
        assert!(frame.contains(BG_RED));
        assert!(frame.contains(BG_BLUE));
        assert!(frame.contains(BG_GREY));
        assert!(frame.contains("res[i2][j2] += A[i2][k2] * B[k2][j2];"));
    }

    #[test]
    fn status_reports_operands() {
        let mut sim = SimulationState::default();
        sim.jump_to(13);
        let status = status_lines(&sim);
        assert_eq!(status[0], "res[1][1] += A[1][2] * B[2][1]    (7 * 20)");
        assert_eq!(status[1], "i2: 1  k2: 2  j2: 1");
        assert_eq!(status[2], "Step 13 of 64");
    }
}
