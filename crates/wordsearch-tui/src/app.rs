use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use std::time::Duration;
use wordsearch_core::{Position, PuzzleMode, PuzzleSession, WordFound};

/// Ticks a toast stays on screen (~1.5 seconds at 100ms per tick)
pub const TOAST_TICKS: u32 = 15;

/// Terminal columns per grid cell
pub const CELL_WIDTH: u16 = 3;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Where the grid was last drawn, for mapping mouse clicks to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridOrigin {
    pub x: u16,
    pub y: u16,
}

/// The main application state
pub struct App {
    /// Puzzle, progress and selection
    pub session: PuzzleSession,
    /// Currently highlighted cell
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Whether a mouse button is held on the grid
    dragging: bool,
    /// Set by the renderer each frame
    pub origin: GridOrigin,
}

impl App {
    pub fn new(session: PuzzleSession, theme: Theme) -> Self {
        Self {
            session,
            cursor: Position::new(0, 0),
            theme,
            message: None,
            message_timer: 0,
            dragging: false,
            origin: GridOrigin::default(),
        }
    }

    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = TOAST_TICKS;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // First press anchors, second commits
            KeyCode::Char(' ') | KeyCode::Enter => {
                let hit = self.session.tap(self.cursor);
                self.on_commit(hit);
            }
            KeyCode::Esc => {
                self.dragging = false;
                self.session.cancel_selection();
            }

            KeyCode::Char('c') => self.clear_progress(),
            KeyCode::Char('n') => {
                self.new_puzzle();
            }
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
        AppAction::Continue
    }

    /// Mouse drag selects a line
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let cell = self.cell_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = cell {
                    self.cursor = pos;
                    self.dragging = !self.session.begin_selection(pos).is_empty();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                if let Some(pos) = cell {
                    self.cursor = pos;
                    self.session.extend_selection(pos);
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                self.dragging = false;
                if let Some(pos) = cell {
                    self.session.extend_selection(pos);
                }
                let hit = self.session.end_selection();
                self.on_commit(hit);
            }
            _ => {}
        }
    }

    /// Terminal cell to grid cell, using the last drawn origin
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.origin.x || row < self.origin.y {
            return None;
        }
        let pos = Position::new(
            (row - self.origin.y) as usize,
            ((column - self.origin.x) / CELL_WIDTH) as usize,
        );
        self.session.grid().contains(pos).then_some(pos)
    }

    pub fn clear_progress(&mut self) {
        self.dragging = false;
        self.session.clear_progress();
        self.show_message("Cleared");
    }

    /// Regenerate from a random seed
    pub fn new_puzzle(&mut self) -> u64 {
        self.dragging = false;
        let seed = rand::thread_rng().gen_range(0..(1u64 << 31));
        self.session.regenerate(seed);
        self.show_message(&format!("New puzzle (seed {})", seed));
        seed
    }

    fn cycle_theme(&mut self) {
        // Dark -> light -> high contrast, keyed off the background
        self.theme = if self.theme.bg == Theme::dark().bg {
            Theme::light()
        } else if self.theme.bg == Theme::light().bg {
            Theme::high_contrast()
        } else {
            Theme::dark()
        };
    }

    fn on_commit(&mut self, hit: Option<WordFound>) {
        let Some(hit) = hit else {
            return;
        };
        if self.session.is_complete() {
            self.show_message(&format!("{} - all words found!", hit.word));
        } else {
            self.show_message(&hit.word);
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let grid = self.session.grid();
        let max_row = grid.rows().saturating_sub(1) as i32;
        let max_col = grid.cols().saturating_sub(1) as i32;
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, max_row) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, max_col) as usize;
        self.cursor = Position::new(new_row, new_col);

        // An anchored selection follows the cursor
        if self.session.selection().is_some() {
            self.session.extend_selection(self.cursor);
        }
    }

    pub fn is_solution_mode(&self) -> bool {
        self.session.mode() == PuzzleMode::Solution
    }
}
