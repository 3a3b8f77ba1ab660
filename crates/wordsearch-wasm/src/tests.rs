//! Tests for WASM word search game functions

#[cfg(test)]
mod tests {
    use crate::game::{GameState, ScreenState, TOAST_TICKS};
    use crate::render::Layout;
    use crate::theme::Theme;
    use wordsearch_core::{MemoryStore, Position, PuzzleConfig, PuzzleMode};

    // seed 1, 10x10: CAT runs diagonally from (1,1), DOG upwards from (4,9)
    fn config() -> PuzzleConfig {
        PuzzleConfig::new(10, 10, 1, &["cat", "dog"])
    }

    fn new_state(store: &MemoryStore) -> GameState {
        GameState::new(&config(), Some("/puzzles/day001/"), Box::new(store.clone())).unwrap()
    }

    fn drag(state: &mut GameState, from: Position, to: Position) -> Option<String> {
        state.pointer_down(Some(from));
        state.pointer_move(Some(to));
        state.pointer_up().map(|hit| hit.word)
    }

    #[test]
    fn test_game_state_new() {
        let state = new_state(&MemoryStore::new());
        assert_eq!(state.screen(), ScreenState::Playing);
        assert_eq!(state.found_count(), 0);
        assert_eq!(state.word_count(), 2);
        assert!(!state.is_dragging());
        assert!(state.message().is_none());
        assert_eq!(state.session().storage_key(), "ws_day001");
    }

    #[test]
    fn test_drag_finds_word_and_toasts() {
        let mut state = new_state(&MemoryStore::new());
        let found = drag(&mut state, Position::new(1, 1), Position::new(3, 3));
        assert_eq!(found.as_deref(), Some("CAT"));
        assert_eq!(state.message(), Some("CAT"));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_toast_expires() {
        let mut state = new_state(&MemoryStore::new());
        drag(&mut state, Position::new(1, 1), Position::new(3, 3));
        for _ in 0..TOAST_TICKS - 1 {
            state.tick();
        }
        assert!(state.message().is_some());
        state.tick();
        assert!(state.message().is_none());
    }

    #[test]
    fn test_drag_outside_grid_ignored() {
        let mut state = new_state(&MemoryStore::new());
        state.pointer_down(None);
        assert!(!state.is_dragging());
        assert!(state.pointer_up().is_none());
    }

    #[test]
    fn test_move_outside_keeps_last_preview() {
        let mut state = new_state(&MemoryStore::new());
        state.pointer_down(Some(Position::new(4, 9)));
        state.pointer_move(Some(Position::new(2, 9)));
        state.pointer_move(None);
        assert_eq!(state.pointer_up().map(|h| h.word).as_deref(), Some("DOG"));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut state = new_state(&MemoryStore::new());
        state.pointer_down(Some(Position::new(1, 1)));
        state.pointer_move(Some(Position::new(3, 3)));
        state.handle_key("Escape");
        assert!(state.pointer_up().is_none());
        assert_eq!(state.found_count(), 0);
    }

    #[test]
    fn test_completion_and_restore() {
        let store = MemoryStore::new();
        let mut state = new_state(&store);
        drag(&mut state, Position::new(3, 3), Position::new(1, 1));
        drag(&mut state, Position::new(4, 9), Position::new(2, 9));
        assert!(state.is_complete());

        let reloaded = new_state(&store);
        assert!(reloaded.is_complete());
        assert_eq!(reloaded.found_count(), 2);
    }

    #[test]
    fn test_clear_progress() {
        let store = MemoryStore::new();
        let mut state = new_state(&store);
        drag(&mut state, Position::new(1, 1), Position::new(3, 3));
        let rows = state.session().grid().row_strings();

        state.handle_key("c");
        assert_eq!(state.found_count(), 0);
        assert_eq!(state.message(), Some("Cleared"));
        assert_eq!(state.session().grid().row_strings(), rows);
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_puzzle_resets() {
        let store = MemoryStore::new();
        let mut state = new_state(&store);
        drag(&mut state, Position::new(1, 1), Position::new(3, 3));
        state.new_puzzle();
        assert_eq!(state.found_count(), 0);
        assert_eq!(state.screen(), ScreenState::Playing);
    }

    #[test]
    fn test_solution_mode_is_read_only() {
        let config = config().with_mode(PuzzleMode::Solution);
        let mut state = GameState::new(&config, None, Box::new(MemoryStore::new())).unwrap();
        assert!(state.is_complete());
        state.pointer_down(Some(Position::new(0, 0)));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PuzzleConfig::new(0, 10, 1, &["cat"]);
        assert!(GameState::new(&config, None, Box::new(MemoryStore::new())).is_err());
    }

    #[test]
    fn test_serializable_state() {
        let state = new_state(&MemoryStore::new());
        let json = serde_json::to_string(&state.to_serializable()).unwrap();
        assert!(json.contains("\"storage_key\":\"ws_day001\""));
        assert!(json.contains("\"rows\":10"));
    }

    #[test]
    fn test_layout_hit_testing() {
        let layout = Layout::compute(900, 640, 10, 10);
        let (x, y) = layout.cell_origin(Position::new(2, 3));
        let half = layout.cell_size / 2.0;
        assert_eq!(layout.cell_at(x + half, y + half), Some(Position::new(2, 3)));
        assert_eq!(layout.cell_at(layout.x - 1.0, layout.y), None);
        assert_eq!(
            layout.cell_at(layout.x + layout.grid_width() + 1.0, layout.y),
            None
        );
    }

    #[test]
    fn test_layout_cell_size_bounds() {
        let small = Layout::compute(360, 360, 30, 30);
        assert!(small.cell_size >= 12.0);
        let large = Layout::compute(4000, 4000, 5, 5);
        assert_eq!(large.cell_size, 40.0);
    }

    #[test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("light").background, Theme::light().background);
        assert_eq!(Theme::by_name("nope").background, Theme::dark().background);
    }
}
