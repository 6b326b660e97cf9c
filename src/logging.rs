use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the background log writer alive; drop it last to flush.
pub struct LogGuard {
    _guard: WorkerGuard,
}

pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("homerow")
        .join("logs")
}

/// Route tracing output to a daily log file. The terminal belongs to the UI,
/// so nothing is written to stdout. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(log_level: &str) -> Option<LogGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = log_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create log directory {}: {err}", dir.display());
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, "homerow.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();
    if initialized.is_err() {
        return None;
    }

    Some(LogGuard { _guard: guard })
}
