//! Pure projection of a session into what a front end draws

use crate::grid::Position;
use crate::session::PuzzleSession;
use serde::Serialize;
use std::collections::BTreeSet;

/// How a single cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Plain,
    /// On the line currently being dragged
    Preview,
    /// Part of a found word; takes precedence over preview
    Found,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub position: Position,
    pub letter: char,
    pub state: CellState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    pub text: String,
    pub found: bool,
    /// False when generation couldn't fit the word on the grid
    pub placed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub rows: usize,
    pub cols: usize,
    /// Row-major
    pub cells: Vec<CellView>,
    pub words: Vec<WordView>,
    pub complete: bool,
}

impl BoardView {
    pub fn cell(&self, pos: Position) -> Option<&CellView> {
        if pos.row < self.rows && pos.col < self.cols {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

/// Snapshot the session for drawing
pub fn project(session: &PuzzleSession) -> BoardView {
    let grid = session.grid();
    let preview: BTreeSet<Position> = session.preview().into_iter().collect();

    let cells = grid
        .positions()
        .map(|position| {
            let state = if session.is_cell_found(position) {
                CellState::Found
            } else if preview.contains(&position) {
                CellState::Preview
            } else {
                CellState::Plain
            };
            CellView {
                position,
                letter: grid.get(position).unwrap_or(' '),
                state,
            }
        })
        .collect();

    let unplaced = session.unplaced_words();
    let words = session
        .words()
        .iter()
        .map(|w| WordView {
            text: w.clone(),
            found: session.is_word_found(w),
            placed: !unplaced.contains(w),
        })
        .collect();

    BoardView {
        title: session.title().map(str::to_string),
        subtitle: session.subtitle().map(str::to_string),
        rows: grid.rows(),
        cols: grid.cols(),
        cells,
        words,
        complete: session.is_complete(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::progress::MemoryStore;

    fn session() -> PuzzleSession {
        let grid = Grid::from_rows(&["CAT", "OXX", "GXX"]).unwrap();
        PuzzleSession::from_grid(grid, &["CAT", "COG", "EMU"], "ws_view", Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_plain_board() {
        let view = project(&session());
        assert_eq!(view.cells.len(), 9);
        assert!(view.cells.iter().all(|c| c.state == CellState::Plain));
        assert_eq!(view.cell(Position::new(2, 0)).unwrap().letter, 'G');
        assert_eq!(view.found_count(), 0);
        assert!(!view.complete);
    }

    #[test]
    fn test_found_beats_preview() {
        let mut session = session();
        session.commit(Position::new(0, 0), Position::new(0, 2));
        session.begin_selection(Position::new(0, 0));
        session.extend_selection(Position::new(2, 0));

        let view = project(&session);
        assert_eq!(view.cell(Position::new(0, 0)).unwrap().state, CellState::Found);
        assert_eq!(view.cell(Position::new(1, 0)).unwrap().state, CellState::Preview);
        assert_eq!(view.cell(Position::new(1, 1)).unwrap().state, CellState::Plain);
        assert!(view.words[0].found);
        assert!(!view.words[1].found);
    }

    #[test]
    fn test_unplaced_word_flagged() {
        let view = project(&session());
        let emu = view.words.iter().find(|w| w.text == "EMU").unwrap();
        assert!(!emu.placed);
        assert!(view.words[0].placed);
    }
}
