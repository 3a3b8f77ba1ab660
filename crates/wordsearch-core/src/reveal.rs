//! Exhaustive search used by the read-only solution view

use crate::generator::Placement;
use crate::grid::{Grid, DIRECTIONS};

/// Result of revealing every word on a grid
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    /// Where each locatable word was found, in word-list order
    pub found: Vec<Placement>,
    /// Words that appear nowhere on the grid
    pub missing: Vec<String>,
}

/// Locate `word` forwards or backwards.
///
/// Scans cells in raster order and, per cell, directions in table order; the
/// first hit wins. A backwards hit is returned from the word's first letter,
/// so the placement always reads as the word.
pub fn find_word(grid: &Grid, word: &str) -> Option<Placement> {
    let len = word.chars().count();
    if len == 0 {
        return None;
    }
    let reversed: String = word.chars().rev().collect();

    for start in grid.positions() {
        for dir in DIRECTIONS {
            if let Some(run) = grid.read(start, dir, len) {
                if run == word {
                    return Some(Placement {
                        word: word.to_string(),
                        start,
                        direction: dir,
                    });
                }
                if run == reversed {
                    let first = grid.step(start, dir, len - 1)?;
                    return Some(Placement {
                        word: word.to_string(),
                        start: first,
                        direction: dir.reversed(),
                    });
                }
            }
        }
    }
    None
}

/// Locate every word of the list
pub fn reveal_all<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Reveal {
    let mut reveal = Reveal::default();
    for word in words {
        let word = word.as_ref();
        match find_word(grid, word) {
            Some(placement) => reveal.found.push(placement),
            None => reveal.missing.push(word.to_string()),
        }
    }
    reveal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::grid::{Direction, Position};

    #[test]
    fn test_finds_forward_word() {
        let grid = Grid::from_rows(&["XCAT", "XXXX"]).unwrap();
        let placement = find_word(&grid, "CAT").unwrap();
        assert_eq!(placement.start, Position::new(0, 1));
        assert_eq!(placement.direction, Direction::new(0, 1));
    }

    #[test]
    fn test_reversed_word_starts_at_first_letter() {
        // TAC at row 0: the scan reaches T first and matches the reversal
        // heading right, reported as CAT heading left
        let grid = Grid::from_rows(&["TACX", "XXXX"]).unwrap();
        let placement = find_word(&grid, "CAT").unwrap();
        assert_eq!(placement.start, Position::new(0, 2));
        assert_eq!(placement.direction, Direction::new(0, -1));
        assert_eq!(grid.read(placement.start, placement.direction, 3).as_deref(), Some("CAT"));
        let cells = placement.cells();
        assert_eq!(cells, vec![Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)]);
    }

    #[test]
    fn test_reversed_diagonal_reads_forward() {
        let grid = Grid::from_rows(&["GXX", "XOX", "XXD"]).unwrap();
        let placement = find_word(&grid, "DOG").unwrap();
        assert_eq!(placement.start, Position::new(2, 2));
        assert_eq!(placement.direction, Direction::new(-1, -1));
    }

    #[test]
    fn test_reveal_reports_missing() {
        let grid = Grid::from_rows(&["CAT", "XXX"]).unwrap();
        let reveal = reveal_all(&grid, &["CAT", "DOG"]);
        assert_eq!(reveal.found.len(), 1);
        assert_eq!(reveal.missing, vec!["DOG".to_string()]);
    }

    #[test]
    fn test_reveals_generated_puzzle() {
        let words = ["RUST", "CARGO", "BORROW", "TRAIT", "LIFETIME", "CRATE"];
        let puzzle = Generator::new(12, 12, 20240101).generate(&words);
        let reveal = reveal_all(&puzzle.grid, &words);
        assert!(reveal.missing.is_empty());
        for placement in &reveal.found {
            let len = placement.word.chars().count();
            let letters = puzzle.grid.read(placement.start, placement.direction, len);
            assert_eq!(letters.as_deref(), Some(placement.word.as_str()));
        }
    }
}
