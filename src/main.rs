// plantui - Daily plant-watering checklist for the terminal
// Entry point for the application

mod app;
mod config;
mod date;
mod event;
mod logging;
mod models;
mod scheduler;
mod storage;
mod tracker;
mod ui;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "plantui", version, about = "Tick off the plants you watered today")]
struct Cli {
    /// Config file (default: <config dir>/plantui/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage file, overrides the config
    #[arg(long)]
    storage: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load(cli.config.as_deref())?;
    let _guard = logging::init(&logging::default_log_dir(), config.log_level.as_deref());

    let storage_path = cli
        .storage
        .or_else(|| config.storage_path.clone())
        .unwrap_or_else(storage::FileStorage::get_default_path);
    let backend = storage::FileStorage::new(storage_path);
    info!(storage = %backend.path().display(), "starting");

    let dates = date::DateService::system();
    let scheduler = scheduler::ResetScheduler::start(dates.clone());
    let store = storage::DailyStateStore::new(backend, dates);
    let plants = app::group_by_location(config.plants());
    let tracker = tracker::Tracker::new(plants, store);
    let mut app = app::App::new(tracker, scheduler);

    // Initialize the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Cleanup and restore terminal on exit
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "app exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
