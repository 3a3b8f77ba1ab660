//! Word search engine
//!
//! Deterministic puzzle generation from a seed and word list, straight-line
//! selection matching, solution reveal and persisted progress. Front ends
//! (browser canvas, terminal) build on [`PuzzleSession`] and project it to a
//! [`BoardView`] for drawing.

mod config;
mod error;
mod generator;
mod grid;
mod progress;
mod reveal;
mod rng;
mod selection;
mod session;
mod view;

pub use config::{PuzzleConfig, PuzzleMode, DEFAULT_SEED};
pub use error::{ConfigError, StoreError};
pub use generator::{Generator, GeneratorConfig, Placement, Puzzle, MAX_PLACEMENT_ATTEMPTS};
pub use grid::{Direction, Grid, Position, DIRECTIONS};
pub use progress::{storage_key_for_path, MemoryStore, Progress, ProgressStore};
pub use reveal::{find_word, reveal_all, Reveal};
pub use rng::Lcg;
pub use selection::{line_cells, match_word, read_path, Selection};
pub use session::{PuzzleSession, WordFound};
pub use view::{project, BoardView, CellState, CellView, WordView};

/// Letters used to fill cells not covered by a placed word
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase a word list the way every puzzle view compares words.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .collect()
}
