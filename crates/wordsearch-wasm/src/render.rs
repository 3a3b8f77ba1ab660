//! Canvas rendering for the word search

use crate::theme::Theme;
use wordsearch_core::{BoardView, CellState, Position};
use web_sys::CanvasRenderingContext2d;

/// Height reserved above the grid for title and subtitle
const HEADER_HEIGHT: f64 = 70.0;
/// Width reserved right of the grid for the word list
const PANEL_WIDTH: f64 = 220.0;
const MARGIN: f64 = 20.0;
/// Gap between cells, like the 2px gap of the HTML grid
const CELL_GAP: f64 = 2.0;

/// Where the grid sits on the canvas, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub cell_size: f64,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    /// Fit a `rows` x `cols` grid into the canvas, never larger than 40px cells
    pub fn compute(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        let avail_w = (width as f64 - PANEL_WIDTH - MARGIN * 3.0).max(100.0);
        let avail_h = (height as f64 - HEADER_HEIGHT - MARGIN * 2.0).max(100.0);
        let cell_by_width = avail_w / cols.max(1) as f64;
        let cell_by_height = avail_h / rows.max(1) as f64;
        let cell_size = cell_by_width.min(cell_by_height).clamp(12.0, 40.0);

        Self {
            x: MARGIN,
            y: HEADER_HEIGHT + MARGIN,
            cell_size,
            rows,
            cols,
        }
    }

    pub fn grid_width(&self) -> f64 {
        self.cell_size * self.cols as f64
    }

    pub fn grid_height(&self) -> f64 {
        self.cell_size * self.rows as f64
    }

    /// Cell under a canvas point
    pub fn cell_at(&self, px: f64, py: f64) -> Option<Position> {
        let dx = px - self.x;
        let dy = py - self.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.cell_size).floor() as usize;
        let row = (dy / self.cell_size).floor() as usize;
        if row < self.rows && col < self.cols {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, pos: Position) -> (f64, f64) {
        (
            self.x + pos.col as f64 * self.cell_size,
            self.y + pos.row as f64 * self.cell_size,
        )
    }
}

/// Render the complete game to canvas
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    view: &BoardView,
    message: Option<&str>,
    theme: &Theme,
    layout: &Layout,
    width: u32,
    height: u32,
) {
    // Clear background
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    render_header(ctx, view, theme, layout);
    render_grid(ctx, view, theme, layout);
    render_word_list(ctx, view, theme, layout);

    if view.complete {
        render_complete_banner(ctx, theme, layout);
    }

    if let Some(msg) = message {
        render_message(ctx, theme, msg, width, height);
    }
}

fn render_header(ctx: &CanvasRenderingContext2d, view: &BoardView, theme: &Theme, layout: &Layout) {
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_fill_style_str(&theme.header_text.as_css());

    if let Some(ref title) = view.title {
        ctx.set_font("bold 24px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
        let _ = ctx.fill_text(title, layout.x, 14.0);
    }
    if let Some(ref subtitle) = view.subtitle {
        ctx.set_font("16px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
        let _ = ctx.fill_text(subtitle, layout.x, 44.0);
    }
}

fn render_grid(ctx: &CanvasRenderingContext2d, view: &BoardView, theme: &Theme, layout: &Layout) {
    let size = layout.cell_size;
    ctx.set_font(&format!(
        "bold {}px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace",
        (size * 0.6).round()
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    // Gap color shows through between cells
    ctx.set_fill_style_str(&theme.grid_lines.as_css());
    ctx.fill_rect(
        layout.x - CELL_GAP,
        layout.y - CELL_GAP,
        layout.grid_width() + CELL_GAP,
        layout.grid_height() + CELL_GAP,
    );

    for cell in &view.cells {
        let (cx, cy) = layout.cell_origin(cell.position);
        let (bg, fg) = match cell.state {
            CellState::Plain => (theme.cell_bg, theme.letter),
            CellState::Preview => (theme.preview_bg, theme.letter),
            CellState::Found => (theme.found_bg, theme.found_text),
        };

        ctx.set_fill_style_str(&bg.as_css());
        ctx.fill_rect(cx, cy, size - CELL_GAP, size - CELL_GAP);

        ctx.set_fill_style_str(&fg.as_css());
        let _ = ctx.fill_text(
            &cell.letter.to_string(),
            cx + (size - CELL_GAP) / 2.0,
            cy + (size - CELL_GAP) / 2.0,
        );
    }
}

fn render_word_list(ctx: &CanvasRenderingContext2d, view: &BoardView, theme: &Theme, layout: &Layout) {
    let x = layout.x + layout.grid_width() + MARGIN;
    let mut y = layout.y;

    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_font("bold 16px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    ctx.set_fill_style_str(&theme.header_text.as_css());
    let _ = ctx.fill_text(
        &format!("Words {}/{}", view.found_count(), view.words.len()),
        x,
        y,
    );
    y += 28.0;

    ctx.set_font("16px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    for word in &view.words {
        let color = if word.found {
            theme.word_found_text
        } else if !word.placed {
            theme.word_missing_text
        } else {
            theme.word_text
        };
        ctx.set_fill_style_str(&color.as_css());
        let _ = ctx.fill_text(&word.text, x, y);

        if word.found {
            // Strike through
            let text_width = ctx
                .measure_text(&word.text)
                .map(|m| m.width())
                .unwrap_or(word.text.len() as f64 * 10.0);
            ctx.set_stroke_style_str(&color.as_css());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            ctx.move_to(x, y + 9.0);
            ctx.line_to(x + text_width, y + 9.0);
            ctx.stroke();
        }
        y += 24.0;
    }
}

fn render_complete_banner(ctx: &CanvasRenderingContext2d, theme: &Theme, layout: &Layout) {
    let cx = layout.x + layout.grid_width() / 2.0;
    let cy = layout.y + layout.grid_height() / 2.0;

    ctx.set_fill_style_str(&theme.background.as_css_alpha(0.75));
    ctx.fill_rect(layout.x, cy - 30.0, layout.grid_width(), 60.0);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 28px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    ctx.set_fill_style_str(&theme.complete_color.as_css());
    let _ = ctx.fill_text("ALL WORDS FOUND", cx, cy);
}

/// Toast at the bottom of the canvas
fn render_message(ctx: &CanvasRenderingContext2d, theme: &Theme, msg: &str, width: u32, height: u32) {
    let box_w = (msg.len() as f64 * 14.0 + 48.0).min(width as f64 - 40.0);
    let box_h = 40.0;
    let x = (width as f64 - box_w) / 2.0;
    let y = height as f64 - box_h - 16.0;

    ctx.set_fill_style_str(&theme.message_bg.as_css());
    ctx.fill_rect(x, y, box_w, box_h);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 18px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    ctx.set_fill_style_str(&theme.message_text.as_css());
    let _ = ctx.fill_text(msg, width as f64 / 2.0, y + box_h / 2.0);
}
