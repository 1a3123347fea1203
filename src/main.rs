mod app;
mod domain;
mod input;
mod persistence;
mod report;
mod ui;

use anyhow::{Context, Result};
use app::{local_today, AppState};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_dir, init_local_dir, load_habits, log_file, resolve_data_dir, FileStore, KeyValueStore,
    MemoryStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "HABITS_LOG";

/// How long the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "habits")]
#[command(about = "A terminal habit tracker with a weekly grid and streaks", long_about = None)]
struct Cli {
    /// Data directory. Defaults to $HABITS_DIR, the nearest .habits directory, or ~/.habits
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep habits in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Draw grid cells with plain ASCII glyphs
    #[arg(long)]
    ascii: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .habits directory in the current directory
    Init,
    /// Print current and best streaks for every habit
    Streaks {
        /// Day to compute streaks for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_dir(&current_dir)?;
            println!("Initialized habits directory: {}", dir.display());
            println!();
            println!("Habits will now be stored in this local directory.");
            println!("Run 'habits' to start tracking.");
            Ok(())
        }
        Some(Commands::Streaks { date }) => {
            let day = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                local_today()
            };

            let store = open_report_store(cli.data_dir.as_deref(), cli.ephemeral)?;
            let habits = load_habits(store.as_ref());
            print!("{}", report::format_streak_report(&habits, day));
            Ok(())
        }
        None => {
            let store = open_store(cli.data_dir.as_deref(), cli.ephemeral)?;
            run_tui(store, !cli.ascii)
        }
    }
}

/// Resolve the data directory, start file logging there, and open the store
fn open_store(data_dir: Option<&Path>, ephemeral: bool) -> Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::default()));
    }

    let dir = resolve_data_dir(data_dir)?;
    ensure_dir(&dir)?;
    init_logging(&dir)?;

    let store = FileStore::new(dir);
    info!(dir = %store.dir().display(), "using habits directory");
    Ok(Box::new(store))
}

/// Read-only store for reports: the data directory is neither created nor logged to
fn open_report_store(data_dir: Option<&Path>, ephemeral: bool) -> Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::default()));
    }
    Ok(Box::new(FileStore::new(resolve_data_dir(data_dir)?)))
}

/// Send tracing output to `<dir>/habits.log` so it never touches the terminal UI
fn init_logging(dir: &Path) -> Result<()> {
    let path = log_file(dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn run_tui(store: Box<dyn KeyValueStore>, use_emoji: bool) -> Result<()> {
    let mut app = AppState::new(store);
    app.use_emoji = use_emoji;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(count = app.habits.len(), "exiting");

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll with a timeout so the grid follows the date across midnight
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
