// Logging - tracing to a daily-rolling file, since the terminal belongs to the UI

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plantui")
        .join("logs")
}

/// `RUST_LOG` wins over `level`; both fall back to `info`.
///
/// Returns `None` and leaves logging disabled when the log directory cannot
/// be created. Otherwise keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init(log_dir: &Path, level: Option<&str>) -> Option<WorkerGuard> {
    if let Err(err) = std::fs::create_dir_all(log_dir) {
        eprintln!("logging disabled: cannot create {}: {}", log_dir.display(), err);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "plantui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Some(guard)
}

fn filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
