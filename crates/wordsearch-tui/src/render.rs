use crate::app::{App, GridOrigin, CELL_WIDTH};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::{project, BoardView, CellState};

/// Width of the word list to the right of the grid
const PANEL_WIDTH: u16 = 24;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;
    execute!(stdout, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let view = project(&app.session);

    let grid_width = view.cols as u16 * CELL_WIDTH + 2;
    let grid_height = view.rows as u16 + 2;
    let total_width = grid_width + 3 + PANEL_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 10 { 2 } else { 1 };

    render_header(stdout, app, &view, start_x, start_y)?;

    let grid_y = start_y + 3;
    // Letters start inside the border
    app.origin = GridOrigin {
        x: start_x + 1,
        y: grid_y + 1,
    };
    render_grid(stdout, app, &view, start_x, grid_y)?;
    render_word_list(stdout, app, &view, start_x + grid_width + 3, grid_y)?;
    render_controls(stdout, app, start_x, grid_y + grid_height + 1)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    execute!(stdout, Show, MoveTo(0, term_height.saturating_sub(1)))?;
    Ok(())
}

fn render_header(
    stdout: &mut io::Stdout,
    app: &App,
    view: &BoardView,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let title = view.title.as_deref().unwrap_or("WORD SEARCH");

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        SetAttribute(Attribute::Bold),
        Print(format!("═══ {} ═══", title)),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(theme.bg)
    )?;

    if let Some(ref subtitle) = view.subtitle {
        execute!(
            stdout,
            MoveTo(x, y + 1),
            SetForegroundColor(theme.info),
            Print(subtitle)
        )?;
    }

    Ok(())
}

fn render_grid(
    stdout: &mut io::Stdout,
    app: &App,
    view: &BoardView,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let inner = "─".repeat((view.cols as u16 * CELL_WIDTH) as usize);

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.border),
        Print(format!("┌{}┐", inner))
    )?;

    for row in 0..view.rows {
        let cell_y = y + 1 + row as u16;
        execute!(
            stdout,
            MoveTo(x, cell_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("│")
        )?;

        for col in 0..view.cols {
            let Some(cell) = view.cells.get(row * view.cols + col) else {
                continue;
            };
            let (mut bg, fg) = match cell.state {
                CellState::Plain => (theme.bg, theme.letter),
                CellState::Preview => (theme.preview_bg, theme.letter),
                CellState::Found => (theme.found_bg, theme.found_fg),
            };
            if cell.position == app.cursor && !app.is_solution_mode() {
                bg = theme.cursor_bg;
            }

            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(format!(" {} ", cell.letter))
            )?;
        }

        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("│")
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1 + view.rows as u16),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(format!("└{}┘", inner))
    )?;

    Ok(())
}

fn render_word_list(
    stdout: &mut io::Stdout,
    app: &App,
    view: &BoardView,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print(format!("Words {}/{}", view.found_count(), view.words.len()))
    )?;

    for (i, word) in view.words.iter().enumerate() {
        let wy = y + 2 + i as u16;
        execute!(stdout, MoveTo(x, wy))?;
        if word.found {
            execute!(
                stdout,
                SetForegroundColor(theme.word_found),
                SetAttribute(Attribute::CrossedOut),
                Print(&word.text),
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(theme.bg)
            )?;
        } else if !word.placed {
            execute!(
                stdout,
                SetForegroundColor(theme.word_missing),
                Print(format!("{} (not placed)", word.text))
            )?;
        } else {
            execute!(stdout, SetForegroundColor(theme.word), Print(&word.text))?;
        }
    }

    if view.complete {
        execute!(
            stdout,
            MoveTo(x, y + 3 + view.words.len() as u16),
            SetForegroundColor(theme.success),
            SetAttribute(Attribute::Bold),
            Print("ALL WORDS FOUND"),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(theme.bg)
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("hjkl/Arrows", "Move"),
        ("Space/Enter", "Anchor/Commit"),
        ("Mouse drag", "Select"),
        ("Esc", "Cancel"),
        ("c", "Clear found"),
        ("n", "New puzzle"),
        ("t", "Theme"),
        ("q", "Quit"),
    ];

    // Display in 2 columns
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 4;
        let row = i % 4;
        let cx = x + (col as u16) * 30;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(format!("{:>11}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.chars().count() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.cursor_bg),
        Print(&padded),
        SetBackgroundColor(theme.bg)
    )?;

    Ok(())
}
