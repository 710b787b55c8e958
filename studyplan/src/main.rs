//! `studyplan`: track study sessions and deadlines from the terminal.
//!
//! Every change is saved immediately to the data file. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/studyplan/config.toml`).
//!
//! ```bash
//! studyplan add-study "Linear algebra" 45
//! studyplan add-deadline "Lab report" "Friday"
//! studyplan done 1
//! studyplan            # dashboard
//! studyplan report
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use studyplan::app;
use studyplan::config::{CliArgs, PlannerConfig};
use studyplan::storage::FileStorage;
use studyplan::tasks::TaskStore;

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let config = match PlannerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());

    tracing::info!(
        data_file = %config.data_file.display(),
        durability = ?config.durability,
        "studyplan starting"
    );

    let mut store = TaskStore::open(FileStorage::new(&config.data_file), config.durability);
    let mut stdout = std::io::stdout().lock();

    match app::execute(&mut store, cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging.
///
/// Logs go to stderr unless a log file is configured, in which case they are
/// written through a non-blocking appender. The returned [`WorkerGuard`] must
/// be held until exit so buffered entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let Some(log_path) = file_path else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
        return None;
    };

    let log_dir = log_path.parent().filter(|p| !p.as_os_str().is_empty());
    let log_dir = log_dir.unwrap_or_else(|| Path::new("."));
    let file_name = log_path.file_name()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
