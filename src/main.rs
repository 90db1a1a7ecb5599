//! docsea binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use docsea::args::{self, Args};
use docsea::{app, theme};

/// Timestamp formatter for the log file ("YYYY-MM-DDTHH:MM:SS", local time).
struct DocseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for DocseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Keeps the non-blocking appender alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing into `~/.config/docsea/logs/docsea.log`, falling back
/// to stderr when the file cannot be opened.
fn init_logging(default_level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("docsea.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_string()))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DocseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_timer(DocseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    if cli.print_cache {
        args::print_cache();
        return;
    }

    init_logging(&cli.log_level);
    tracing::info!(
        query = cli.query.as_deref().unwrap_or(""),
        specialization = cli.specialization.as_deref().unwrap_or(""),
        "docsea starting"
    );
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("docsea exited");
}
