mod app;
mod render;
mod store;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use store::FileStore;
use theme::Theme;
use wordsearch_core::{PuzzleConfig, PuzzleMode, PuzzleSession};

/// Word search in the terminal
#[derive(Parser, Debug)]
#[command(name = "wordsearch", version, about)]
struct Args {
    /// Puzzle config JSON (gridRows, gridCols, seed, words, ...)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Show every word already found
    #[arg(long)]
    solution: bool,
    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,
    /// dark, light or high_contrast
    #[arg(long, default_value = "dark")]
    theme: String,
    /// Write logs here; the terminal itself is busy drawing the grid
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Puzzle used when no config file is given
fn sample_config() -> PuzzleConfig {
    let mut config = PuzzleConfig::new(
        12,
        12,
        20240101,
        &["rust", "cargo", "borrow", "trait", "lifetime", "crate"],
    );
    config.title = Some("Word Search".to_string());
    config.subtitle = Some("Find the Rust words".to_string());
    config
}

fn load_config(args: &Args) -> io::Result<PuzzleConfig> {
    let mut config = match args.config {
        Some(ref path) => {
            let json = fs::read_to_string(path)?;
            PuzzleConfig::from_json(&json)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?
        }
        None => sample_config(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.solution {
        config = config.with_mode(PuzzleMode::Solution);
    }
    Ok(config)
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let config = load_config(&args)?;
    // The config file name doubles as the page path for storage keys
    let page_path = args.config.as_ref().map(|p| p.to_string_lossy().into_owned());
    let store = FileStore::in_data_dir();
    let store_dir = store.dir().display().to_string();
    let session = PuzzleSession::new(&config, page_path.as_deref(), Box::new(store))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    tracing::info!(
        key = session.storage_key(),
        seed = session.seed(),
        dir = %store_dir,
        "puzzle loaded"
    );

    let mut app = App::new(session, Theme::by_name(&args.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for toast updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
