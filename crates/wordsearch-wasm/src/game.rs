//! Game state management for the WASM word search

use serde::Serialize;
use wordsearch_core::{
    project, BoardView, ConfigError, Position, ProgressStore, PuzzleConfig, PuzzleSession,
    WordFound,
};

/// Toast lifetime in ticks (~1.5 seconds at 60fps)
pub const TOAST_TICKS: u32 = 90;

/// Screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenState {
    Playing,
    Complete,
}

/// Serializable snapshot handed to the hosting page
#[derive(Debug, Clone, Serialize)]
pub struct SerializableState {
    pub storage_key: String,
    pub seed: u64,
    pub screen: ScreenState,
    pub board: BoardView,
    pub message: Option<String>,
}

/// The game state
pub struct GameState {
    /// Puzzle, progress and the selection in flight
    session: PuzzleSession,
    /// Whether a pointer is held down on the grid
    dragging: bool,
    /// Screen state
    screen: ScreenState,
    /// Current toast
    message: Option<String>,
    /// Toast timer (ticks remaining)
    message_timer: u32,
}

impl GameState {
    /// Create a game for `config`, restoring progress from `store`
    pub fn new(
        config: &PuzzleConfig,
        page_path: Option<&str>,
        store: Box<dyn ProgressStore>,
    ) -> Result<Self, ConfigError> {
        let session = PuzzleSession::new(config, page_path, store)?;
        let mut state = Self {
            session,
            dragging: false,
            screen: ScreenState::Playing,
            message: None,
            message_timer: 0,
        };
        state.update_screen();
        Ok(state)
    }

    /// Count down the toast (called each frame)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Pointer pressed; `None` when outside the grid
    pub fn pointer_down(&mut self, cell: Option<Position>) {
        let Some(pos) = cell else {
            return;
        };
        if self.session.begin_selection(pos).is_empty() {
            return;
        }
        self.dragging = true;
    }

    /// Pointer moved; positions outside the grid keep the last preview
    pub fn pointer_move(&mut self, cell: Option<Position>) {
        if !self.dragging {
            return;
        }
        if let Some(pos) = cell {
            self.session.extend_selection(pos);
        }
    }

    /// Pointer released: commit the line and report a newly found word
    pub fn pointer_up(&mut self) -> Option<WordFound> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let found = self.session.end_selection();
        if let Some(ref hit) = found {
            self.show_message(&hit.word);
            self.update_screen();
        }
        found
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: &str) {
        match key {
            "Escape" => {
                self.dragging = false;
                self.session.cancel_selection();
            }
            "c" => self.clear_progress(),
            "n" => {
                self.new_puzzle();
            }
            _ => {}
        }
    }

    /// Clear found words, keep the grid
    pub fn clear_progress(&mut self) {
        self.dragging = false;
        self.session.clear_progress();
        self.show_message("Cleared");
        self.update_screen();
    }

    /// Fresh grid from a random seed; progress goes with the old grid
    pub fn new_puzzle(&mut self) -> u64 {
        self.dragging = false;
        let seed = self.session.regenerate_random();
        self.show_message("New puzzle");
        self.update_screen();
        seed
    }

    fn update_screen(&mut self) {
        self.screen = if self.session.is_complete() {
            ScreenState::Complete
        } else {
            ScreenState::Playing
        };
    }

    fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = TOAST_TICKS;
    }

    /// Drawable snapshot
    pub fn view(&self) -> BoardView {
        project(&self.session)
    }

    /// Convert to serializable format
    pub fn to_serializable(&self) -> SerializableState {
        SerializableState {
            storage_key: self.session.storage_key().to_string(),
            seed: self.session.seed(),
            screen: self.screen,
            board: self.view(),
            message: self.message.clone(),
        }
    }

    // Getters
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }
    pub fn screen(&self) -> ScreenState {
        self.screen
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
    pub fn is_complete(&self) -> bool {
        self.screen == ScreenState::Complete
    }
    pub fn found_count(&self) -> usize {
        self.session.found_words().len()
    }
    pub fn word_count(&self) -> usize {
        self.session.words().len()
    }
}
