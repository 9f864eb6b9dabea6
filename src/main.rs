mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod timer;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use persistence::{ensure_data_dir, init_local_data_dir, log_file, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pomofocus")]
#[command(about = "A terminal Pomodoro timer with task tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomofocus directory in the current directory
    Init,
    /// Append a task to the task list
    Add {
        /// Task title
        title: String,
        /// Estimated number of pomodoros
        #[arg(short, long, default_value_t = 1)]
        estimate: u32,
    },
    /// Print settings, tasks and the session summary
    Status,
    /// Forget persisted settings and tasks
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized pomofocus directory: {}", data_dir.display());
            println!();
            println!("Pomofocus will now use this local directory for settings and tasks.");
            Ok(())
        }
        Some(Commands::Add { title, estimate }) => {
            let data_dir = ensure_data_dir()?;
            init_logging(&data_dir);
            let mut app = AppState::load(Box::new(FileStore::new(&data_dir)));
            if !app.add_task(&title, estimate) {
                anyhow::bail!("Task title must not be empty and the estimate must be at least 1");
            }
            app.save().context("Failed to save tasks")?;
            println!("Added task #{}: {}", app.tasks.len(), title.trim());
            Ok(())
        }
        Some(Commands::Status) => {
            let data_dir = ensure_data_dir()?;
            init_logging(&data_dir);
            let app = AppState::load(Box::new(FileStore::new(&data_dir)));
            print_status(&app, &data_dir);
            Ok(())
        }
        Some(Commands::Reset) => {
            let data_dir = ensure_data_dir()?;
            init_logging(&data_dir);
            let mut store = FileStore::new(&data_dir);
            persistence::clear(&mut store).context("Failed to remove persisted state")?;
            tracing::info!("persisted state cleared");
            println!("Cleared settings and tasks in {}", data_dir.display());
            Ok(())
        }
        None => run_tui(),
    }
}

/// Route tracing output to the log file in the data directory; the terminal
/// belongs to the UI.
fn init_logging(data_dir: &Path) {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pomofocus=info"))
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file(data_dir))
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
}

fn print_status(app: &AppState, data_dir: &Path) {
    println!("Data directory: {}", data_dir.display());
    println!();
    println!("Settings");
    println!("  Pomodoro:    {} min", app.settings.focus_minutes);
    println!("  Short break: {} min", app.settings.short_break_minutes);
    println!("  Long break:  {} min", app.settings.long_break_minutes);
    println!("  Theme:       {}", app.settings.theme_color);
    println!();
    println!("Tasks");
    if app.tasks.is_empty() {
        println!("  (none)");
    }
    for row in app.tasks.rows() {
        let marker = if row.is_active { "*" } else { " " };
        println!("{} {:>2}. {} ({})", marker, row.position, row.title, row.estimated_units);
    }
    println!();
    for (label, value) in app.summary().lines() {
        println!("{:<25}{}", label, value);
    }
}

fn run_tui() -> Result<()> {
    let data_dir = ensure_data_dir()?;
    init_logging(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), "=== pomofocus starting ===");

    // Load before the terminal accepts any input
    let mut app = AppState::load(Box::new(FileStore::new(&data_dir)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("=== pomofocus exiting ===");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();
    let mut shown_title = String::new();

    loop {
        // Mirror the clock into the window title
        let title = app.window_title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            shown_title = title;
        }

        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick();
        app.autosave();
    }
}
