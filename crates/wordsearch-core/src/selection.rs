//! Straight-line selection geometry and word matching

use crate::grid::{Grid, Position};

/// Cells on the straight line from `start` to `end`, inclusive.
///
/// Horizontal, vertical and exact 45-degree diagonals are accepted. Anything
/// else, or an endpoint off the board, yields an empty path. `start == end`
/// yields the single cell.
pub fn line_cells(rows: usize, cols: usize, start: Position, end: Position) -> Vec<Position> {
    let in_bounds = |p: Position| p.row < rows && p.col < cols;
    if !in_bounds(start) || !in_bounds(end) {
        return Vec::new();
    }

    let d_row = end.row as i64 - start.row as i64;
    let d_col = end.col as i64 - start.col as i64;
    let straight = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !straight {
        return Vec::new();
    }

    let steps = d_row.abs().max(d_col.abs());
    let (step_r, step_c) = (d_row.signum(), d_col.signum());
    (0..=steps)
        .map(|i| {
            Position::new(
                (start.row as i64 + step_r * i) as usize,
                (start.col as i64 + step_c * i) as usize,
            )
        })
        .collect()
}

/// Letters along a path, in path order
pub fn read_path(grid: &Grid, path: &[Position]) -> String {
    path.iter().filter_map(|&p| grid.get(p)).collect()
}

/// First word equal to `candidate` read forwards or backwards
pub fn match_word<'a, S: AsRef<str>>(words: &'a [S], candidate: &str) -> Option<&'a str> {
    if candidate.chars().count() < 2 {
        return None;
    }
    let reversed: String = candidate.chars().rev().collect();
    words
        .iter()
        .map(|w| w.as_ref())
        .find(|w| *w == candidate || *w == reversed)
}

/// Transient drag/tap selection, discarded after every commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position) -> Self {
        Self { start, end: start }
    }

    /// Resolved path for the current endpoints
    pub fn path(&self, grid: &Grid) -> Vec<Position> {
        line_cells(grid.rows(), grid.cols(), self.start, self.end)
    }
}
