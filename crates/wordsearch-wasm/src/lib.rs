//! WebAssembly word search with canvas rendering
//!
//! The hosting page provides a puzzle config (either passed to the
//! constructor or as the page-global `PUZZLE_CONFIG`) and forwards pointer
//! events in canvas CSS pixels.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};
use wordsearch_core::PuzzleConfig;

mod game;
mod render;
mod storage;
mod theme;

#[cfg(test)]
mod tests;

pub use game::{GameState, ScreenState};
pub use render::Layout;
pub use storage::LocalStorage;
pub use theme::Theme;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct WordSearchGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    layout: Layout,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl WordSearchGame {
    /// Create a game on `canvas_id` from a config object
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<WordSearchGame, JsValue> {
        let config: PuzzleConfig = serde_wasm_bindgen::from_value(config).map_err(|e| {
            let msg = format!("Puzzle cannot load: {}", e);
            web_sys::console::error_1(&msg.clone().into());
            JsValue::from_str(&msg)
        })?;
        Self::with_config(canvas_id, &config)
    }

    /// Create a game from the page-global `PUZZLE_CONFIG`
    #[wasm_bindgen]
    pub fn from_page_config(canvas_id: &str) -> Result<WordSearchGame, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let config = js_sys::Reflect::get(&window, &JsValue::from_str("PUZZLE_CONFIG"))?;
        if config.is_undefined() || config.is_null() {
            web_sys::console::error_1(&"PUZZLE_CONFIG missing; cannot load puzzle".into());
            return Err(JsValue::from_str("Puzzle cannot load (missing PUZZLE_CONFIG)"));
        }
        Self::new(canvas_id, config)
    }

    fn with_config(canvas_id: &str, config: &PuzzleConfig) -> Result<WordSearchGame, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let page_path = window.location().pathname().ok();
        let state = GameState::new(
            config,
            page_path.as_deref(),
            Box::new(LocalStorage::from_window()),
        )
        .map_err(|e| {
            let msg = format!("Puzzle cannot load: {}", e);
            web_sys::console::error_1(&msg.clone().into());
            JsValue::from_str(&msg)
        })?;

        let width = 900;
        let height = 640;
        let layout = Layout::compute(width, height, config.grid_rows, config.grid_cols);

        let mut game = WordSearchGame {
            state,
            canvas,
            ctx,
            theme: Theme::dark(),
            layout,
            width,
            height,
            dpr: 1.0,
        };
        game.resize(width, height);
        Ok(game)
    }

    /// Pointer pressed at canvas coordinates (CSS pixels)
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let cell = self.layout.cell_at(x, y);
        self.state.pointer_down(cell);
        self.render();
    }

    /// Pointer moved while pressed
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.state.is_dragging() {
            return;
        }
        let cell = self.layout.cell_at(x, y);
        self.state.pointer_move(cell);
        self.render();
    }

    /// Pointer released; returns the word found by this gesture, if any
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> Option<String> {
        let found = self.state.pointer_up().map(|hit| hit.word);
        self.render();
        found
    }

    /// Handle keyboard input
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) {
        self.state.handle_key(&event.key());
        self.render();
    }

    /// Update toast timers (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        let had_message = self.state.message().is_some();
        self.state.tick();
        if had_message {
            self.render();
        }
    }

    /// Forget found words but keep the grid
    #[wasm_bindgen]
    pub fn clear_progress(&mut self) {
        self.state.clear_progress();
        self.render();
    }

    /// Build a new grid from a random seed
    #[wasm_bindgen]
    pub fn new_puzzle(&mut self) {
        self.state.new_puzzle();
        self.render();
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = Theme::by_name(theme_name);
        self.render();
    }

    /// Get current game state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.state.to_serializable()).unwrap_or_default()
    }

    /// Stored progress record for this puzzle
    #[wasm_bindgen]
    pub fn progress_json(&self) -> String {
        self.state.session().progress().to_json().unwrap_or_default()
    }

    /// Check if every word is found
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[wasm_bindgen]
    pub fn found_count(&self) -> usize {
        self.state.found_count()
    }

    #[wasm_bindgen]
    pub fn word_count(&self) -> usize {
        self.state.word_count()
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimum sizes
        let width = width.max(360);
        let height = height.max(360);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr for crisp rendering)
        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Reset and scale context to account for dpr
        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        let grid = self.state.session().grid();
        self.layout = Layout::compute(width, height, grid.rows(), grid.cols());

        self.render();
    }

    /// Get current width
    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    /// Get current height
    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    /// Render the game to canvas
    fn render(&self) {
        render::render_game(
            &self.ctx,
            &self.state.view(),
            self.state.message(),
            &self.theme,
            &self.layout,
            self.width,
            self.height,
        );
    }
}
