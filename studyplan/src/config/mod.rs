//! Configuration system for the `studyplan` CLI.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/studyplan/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;

use crate::tasks::DurabilityPolicy;

/// File name used when no data directory can be determined.
pub const FALLBACK_DATA_FILE: &str = "data.bin";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    logging: LoggingFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    data_file: Option<PathBuf>,
    durability: Option<DurabilityPolicy>,
}

/// `[logging]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    level: Option<String>,
    file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Where the task list is persisted.
    pub data_file: PathBuf,
    /// Whether write failures abort commands.
    pub durability: DurabilityPolicy,
    /// Log level filter string.
    pub log_level: String,
    /// Log file; `None` logs to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            durability: DurabilityPolicy::BestEffort,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `PlannerConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            data_file: cli
                .data_file
                .clone()
                .or_else(|| file.storage.data_file.clone())
                .unwrap_or(defaults.data_file),
            durability: cli
                .durability
                .or(file.storage.durability)
                .unwrap_or(defaults.durability),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| file.logging.level.clone())
                .unwrap_or(defaults.log_level),
            log_file: cli
                .log_file
                .clone()
                .or_else(|| file.logging.file.clone()),
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Track study sessions and deadlines")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/studyplan/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Task data file (default: `<data dir>/studyplan/tasks.bin`).
    #[arg(long, env = "STUDYPLAN_DATA")]
    pub data_file: Option<PathBuf>,

    /// Fail commands when the task list cannot be saved.
    #[arg(long, value_enum)]
    pub durability: Option<DurabilityPolicy>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "STUDYPLAN_LOG")]
    pub log_level: Option<String>,

    /// Path to log file (default: stderr).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Task store operations exposed on the command line.
#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a study session.
    AddStudy {
        /// What to study.
        title: String,
        /// Estimated duration in minutes.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        minutes: u32,
    },
    /// Add a deadline.
    AddDeadline {
        /// What is due.
        title: String,
        /// When it is due (free text).
        due: String,
    },
    /// Mark the task at a 1-based position as done.
    Done {
        /// Task number as shown by `list`.
        position: usize,
    },
    /// List all tasks.
    List {
        /// Print the tasks as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the productivity score.
    Report {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Default data file location under the platform data directory.
fn default_data_file() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_FILE),
        |dir| dir.join("studyplan").join("tasks.bin"),
    )
}

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("studyplan").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
