//! One loaded puzzle: grid, word list, found state and the gesture in flight

use crate::config::{PuzzleConfig, PuzzleMode};
use crate::error::ConfigError;
use crate::generator::{Generator, Puzzle};
use crate::grid::{Grid, Position};
use crate::progress::{Progress, ProgressStore};
use crate::reveal::reveal_all;
use crate::rng::Lcg;
use crate::selection::{line_cells, match_word, read_path, Selection};
use std::collections::BTreeSet;

/// Signal raised when a selection matches a word for the first time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFound {
    pub word: String,
    pub cells: Vec<Position>,
}

/// A puzzle instance. Several can coexist; each owns its store handle.
pub struct PuzzleSession {
    title: Option<String>,
    subtitle: Option<String>,
    mode: PuzzleMode,
    /// Uppercased, in listed order
    words: Vec<String>,
    seed: u64,
    puzzle: Puzzle,
    progress: Progress,
    selection: Option<Selection>,
    storage_key: String,
    store: Box<dyn ProgressStore>,
}

impl PuzzleSession {
    /// Generate the puzzle described by `config` and bring in prior progress
    /// (interactive) or every answer (solution mode).
    pub fn new(
        config: &PuzzleConfig,
        page_path: Option<&str>,
        store: Box<dyn ProgressStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let words = config.normalized_words();
        let puzzle = Generator::new(config.grid_rows, config.grid_cols, config.seed).generate(&words);

        let mut session = Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            mode: config.mode,
            words,
            seed: config.seed,
            puzzle,
            progress: Progress::default(),
            selection: None,
            storage_key: config.resolve_storage_key(page_path),
            store,
        };
        session.load_initial_state();
        Ok(session)
    }

    /// Wrap a hand-authored grid. Words that can't be located on it are
    /// reported as unplaced.
    pub fn from_grid<S: AsRef<str>>(
        grid: Grid,
        words: &[S],
        storage_key: &str,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        let words = crate::normalize_words(words);
        let reveal = reveal_all(&grid, &words);
        let puzzle = Puzzle {
            grid,
            placements: reveal.found,
            unplaced: reveal.missing,
        };
        let mut session = Self {
            title: None,
            subtitle: None,
            mode: PuzzleMode::Interactive,
            words,
            seed: 0,
            puzzle,
            progress: Progress::default(),
            selection: None,
            storage_key: storage_key.to_string(),
            store,
        };
        session.load_initial_state();
        session
    }

    fn load_initial_state(&mut self) {
        match self.mode {
            PuzzleMode::Interactive => self.restore_progress(),
            PuzzleMode::Solution => self.reveal_solution(),
        }
    }

    /// Merge whatever the store holds for this puzzle. Entries that don't
    /// belong to the current grid or word list are dropped.
    pub fn restore_progress(&mut self) {
        let Some(raw) = self.store.load(&self.storage_key) else {
            return;
        };
        let stored = Progress::from_json(&raw);
        let grid = &self.puzzle.grid;

        let restored = Progress {
            found_words: stored
                .found_words
                .into_iter()
                .filter(|w| self.words.contains(w))
                .collect(),
            found_cells: stored
                .found_cells
                .into_iter()
                .filter(|p| grid.contains(*p))
                .collect(),
        };

        tracing::debug!(
            key = %self.storage_key,
            words = restored.found_words.len(),
            "restored progress"
        );
        self.progress.merge(restored);
    }

    /// Mark every locatable word as found without any gesture
    pub fn reveal_solution(&mut self) {
        let reveal = reveal_all(&self.puzzle.grid, &self.words);
        for placement in &reveal.found {
            self.progress.record(&placement.word, &placement.cells());
        }
    }

    /// Start a drag at `pos`; returns the preview path
    pub fn begin_selection(&mut self, pos: Position) -> Vec<Position> {
        if self.mode == PuzzleMode::Solution || !self.puzzle.grid.contains(pos) {
            self.selection = None;
            return Vec::new();
        }
        self.selection = Some(Selection::new(pos));
        self.preview()
    }

    /// Move the drag end; returns the new preview path
    pub fn extend_selection(&mut self, pos: Position) -> Vec<Position> {
        match self.selection.as_mut() {
            Some(sel) if self.puzzle.grid.contains(pos) => {
                sel.end = pos;
                self.preview()
            }
            Some(_) => self.preview(),
            None => Vec::new(),
        }
    }

    /// Finish the drag, committing whatever line it describes
    pub fn end_selection(&mut self) -> Option<WordFound> {
        let sel = self.selection.take()?;
        self.commit(sel.start, sel.end)
    }

    /// Drop the drag without committing
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Tap-to-select: the first tap anchors, the second commits
    pub fn tap(&mut self, pos: Position) -> Option<WordFound> {
        if self.selection.is_none() {
            self.begin_selection(pos);
            return None;
        }
        self.extend_selection(pos);
        self.end_selection()
    }

    /// Current preview path, empty when there's no drag or it isn't straight
    pub fn preview(&self) -> Vec<Position> {
        self.selection
            .map(|sel| sel.path(&self.puzzle.grid))
            .unwrap_or_default()
    }

    /// Evaluate the line from `start` to `end` against the words not yet found
    pub fn commit(&mut self, start: Position, end: Position) -> Option<WordFound> {
        if self.mode == PuzzleMode::Solution {
            return None;
        }
        let grid = &self.puzzle.grid;
        let path = line_cells(grid.rows(), grid.cols(), start, end);
        if path.len() < 2 {
            return None;
        }

        // Found words are no longer candidates (POT then TOP)
        let candidate = read_path(grid, &path);
        let remaining = self.remaining_words();
        let hit = match_word(&remaining, &candidate)?.to_string();

        self.progress.record(&hit, &path);
        self.persist();
        tracing::debug!(word = %hit, "word found");

        Some(WordFound {
            word: hit,
            cells: path,
        })
    }

    fn persist(&mut self) {
        let result = self
            .progress
            .to_json()
            .and_then(|json| self.store.save(&self.storage_key, &json));
        if let Err(err) = result {
            tracing::warn!(key = %self.storage_key, error = %err, "failed to save progress");
        }
    }

    /// Forget found words and cells but keep the grid
    pub fn clear_progress(&mut self) {
        self.progress.clear();
        self.selection = None;
        if let Err(err) = self.store.remove(&self.storage_key) {
            tracing::warn!(key = %self.storage_key, error = %err, "failed to clear progress");
        }
        if self.mode == PuzzleMode::Solution {
            self.reveal_solution();
        }
    }

    /// Build a new grid from `seed`; progress from the old grid is cleared
    pub fn regenerate(&mut self, seed: u64) {
        let (rows, cols) = (self.puzzle.grid.rows(), self.puzzle.grid.cols());
        self.puzzle = Generator::new(rows, cols, seed).generate(&self.words);
        self.seed = seed;
        self.clear_progress();
    }

    /// Regenerate with a seed from the platform entropy source
    pub fn regenerate_random(&mut self) -> u64 {
        let seed = Lcg::entropy_seed();
        self.regenerate(seed);
        seed
    }

    // Getters
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
    pub fn words(&self) -> &[String] {
        &self.words
    }
    pub fn mode(&self) -> PuzzleMode {
        self.mode
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }
    pub fn progress(&self) -> &Progress {
        &self.progress
    }
    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.progress.found_words
    }
    pub fn found_cells(&self) -> &BTreeSet<Position> {
        &self.progress.found_cells
    }
    pub fn unplaced_words(&self) -> &[String] {
        &self.puzzle.unplaced
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.progress.found_words.contains(word)
    }

    pub fn is_cell_found(&self, pos: Position) -> bool {
        self.progress.found_cells.contains(&pos)
    }

    /// Listed words not yet found
    pub fn remaining_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !self.is_word_found(w))
            .map(String::as_str)
            .collect()
    }

    /// True once every listed word is found
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(|w| self.is_word_found(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn cat_dog_session(store: &MemoryStore) -> PuzzleSession {
        // CAT on row 0 forwards, DOG in column 0 downwards
        let grid = Grid::from_rows(&["CATX", "OXXX", "GXXX", "XXXX"]).unwrap();
        PuzzleSession::from_grid(grid, &["cat", "cog"], "ws_test", Box::new(store.clone()))
    }

    #[test]
    fn test_forward_selection_matches() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        let found = session.commit(p(0, 0), p(0, 2)).unwrap();
        assert_eq!(found.word, "CAT");
        assert_eq!(found.cells, vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert!(session.is_word_found("CAT"));
        assert!(session.is_cell_found(p(0, 1)));
    }

    #[test]
    fn test_reversed_selection_matches() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        let found = session.commit(p(0, 2), p(0, 0)).unwrap();
        assert_eq!(found.word, "CAT");
        assert_eq!(found.cells, vec![p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn test_reversal_pair_both_found() {
        let store = MemoryStore::new();
        let grid = Grid::from_rows(&["POTX", "XXXX", "TOPX"]).unwrap();
        let mut session =
            PuzzleSession::from_grid(grid, &["pot", "top"], "ws_pair", Box::new(store.clone()));

        assert_eq!(session.commit(p(0, 0), p(0, 2)).map(|h| h.word).as_deref(), Some("POT"));
        assert_eq!(session.commit(p(2, 0), p(2, 2)).map(|h| h.word).as_deref(), Some("TOP"));
        assert!(session.is_complete());
        assert!(session.commit(p(0, 2), p(0, 0)).is_none());
    }

    #[test]
    fn test_commit_is_idempotent() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        assert!(session.commit(p(0, 0), p(0, 2)).is_some());
        let before = session.progress().clone();
        assert!(session.commit(p(0, 2), p(0, 0)).is_none());
        assert_eq!(session.progress(), &before);
    }

    #[test]
    fn test_non_matching_and_invalid_lines() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        assert!(session.commit(p(0, 0), p(0, 3)).is_none()); // CATX
        assert!(session.commit(p(0, 0), p(1, 2)).is_none()); // not straight
        assert!(session.commit(p(0, 0), p(0, 0)).is_none()); // single cell
        assert!(session.found_words().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_drag_gesture() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        assert_eq!(session.begin_selection(p(0, 0)), vec![p(0, 0)]);
        assert!(session.extend_selection(p(1, 2)).is_empty());
        assert_eq!(session.extend_selection(p(2, 0)).len(), 3);
        let found = session.end_selection().unwrap();
        assert_eq!(found.word, "COG");
        assert!(session.selection().is_none());
        assert!(session.end_selection().is_none());
    }

    #[test]
    fn test_selection_discarded_without_match() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        session.begin_selection(p(3, 3));
        session.extend_selection(p(3, 0));
        assert!(session.end_selection().is_none());
        assert!(session.selection().is_none());
        assert!(session.preview().is_empty());
    }

    #[test]
    fn test_tap_gesture() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        assert!(session.tap(p(2, 0)).is_none());
        assert_eq!(session.preview(), vec![p(2, 0)]);
        let found = session.tap(p(0, 0)).unwrap();
        assert_eq!(found.word, "COG");
    }

    #[test]
    fn test_progress_persisted_and_restored() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        session.commit(p(0, 0), p(0, 2));
        assert!(store.get("ws_test").is_some());

        let reopened = cat_dog_session(&store);
        assert_eq!(reopened.progress(), session.progress());
        assert_eq!(reopened.remaining_words(), vec!["COG"]);
    }

    #[test]
    fn test_restore_drops_foreign_entries() {
        let store = MemoryStore::new();
        store.insert(
            "ws_test",
            r#"{"foundWords":["CAT","ZEBRA"],"foundCells":["0,0","9,9"]}"#,
        );
        let session = cat_dog_session(&store);
        assert_eq!(session.found_words().len(), 1);
        assert_eq!(session.found_cells().len(), 1);
    }

    #[test]
    fn test_corrupt_store_means_fresh_start() {
        let store = MemoryStore::new();
        store.insert("ws_test", "{{{");
        let session = cat_dog_session(&store);
        assert!(session.progress().is_empty());
    }

    #[test]
    fn test_clear_progress_keeps_grid() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        session.commit(p(0, 0), p(0, 2));
        let grid = session.grid().clone();
        session.clear_progress();
        assert!(session.progress().is_empty());
        assert_eq!(session.grid(), &grid);
        assert!(store.get("ws_test").is_none());
    }

    #[test]
    fn test_completion() {
        let store = MemoryStore::new();
        let mut session = cat_dog_session(&store);
        session.commit(p(0, 0), p(0, 2));
        assert!(!session.is_complete());
        session.commit(p(2, 0), p(0, 0));
        assert!(session.is_complete());
    }

    #[test]
    fn test_generated_session() {
        let store = MemoryStore::new();
        let config = PuzzleConfig::new(10, 10, 1, &["cat", "dog"]);
        let mut session =
            PuzzleSession::new(&config, Some("/puzzles/day001/"), Box::new(store.clone())).unwrap();
        assert_eq!(session.storage_key(), "ws_day001");

        // CAT runs diagonally from (1,1); DOG runs upwards from (4,9)
        assert_eq!(session.commit(p(3, 3), p(1, 1)).unwrap().word, "CAT");
        assert_eq!(session.commit(p(4, 9), p(2, 9)).unwrap().word, "DOG");
        assert!(session.is_complete());
        assert!(store.get("ws_day001").is_some());
    }

    #[test]
    fn test_invalid_config_aborts() {
        let config = PuzzleConfig::new::<&str>(10, 10, 1, &[]);
        assert!(PuzzleSession::new(&config, None, Box::new(MemoryStore::new())).is_err());
    }

    #[test]
    fn test_regenerate_clears_and_changes_grid() {
        let store = MemoryStore::new();
        let config = PuzzleConfig::new(10, 10, 1, &["cat", "dog"]);
        let mut session = PuzzleSession::new(&config, None, Box::new(store.clone())).unwrap();
        session.commit(p(3, 3), p(1, 1));
        let old = session.grid().clone();

        session.regenerate(2);
        assert_eq!(session.seed(), 2);
        assert_ne!(session.grid(), &old);
        assert!(session.progress().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_solution_mode_reveals_everything() {
        let store = MemoryStore::new();
        let config = PuzzleConfig::new(10, 10, 1, &["cat", "dog"]).with_mode(PuzzleMode::Solution);
        let mut session = PuzzleSession::new(&config, None, Box::new(store.clone())).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.found_cells().len(), 6);
        assert!(session.begin_selection(p(1, 1)).is_empty());
        assert!(session.commit(p(3, 3), p(1, 1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unplaced_words_surface() {
        let config = PuzzleConfig::new(3, 3, 7, &["toolong", "ab"]);
        let session = PuzzleSession::new(&config, None, Box::new(MemoryStore::new())).unwrap();
        assert_eq!(session.unplaced_words(), &["TOOLONG".to_string()]);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_two_sessions_do_not_collide() {
        let store = MemoryStore::new();
        let a_cfg = PuzzleConfig::new(10, 10, 1, &["cat", "dog"]).with_storage_key("ws_a");
        let b_cfg = PuzzleConfig::new(10, 10, 1, &["cat", "dog"]).with_storage_key("ws_b");
        let mut a = PuzzleSession::new(&a_cfg, None, Box::new(store.clone())).unwrap();
        let b = PuzzleSession::new(&b_cfg, None, Box::new(store.clone())).unwrap();
        a.commit(p(3, 3), p(1, 1));
        assert_eq!(a.found_words().len(), 1);
        assert!(b.found_words().is_empty());
        assert_eq!(store.len(), 1);
    }
}
