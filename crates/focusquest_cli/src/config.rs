//! Command-line arguments and resolved runtime configuration.

use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SQLITE_FILE_NAME: &str = "focusquest.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Terminal quest board: Backlog, Doing, Done.
#[derive(Parser, Debug)]
#[command(name = "focusquest", version)]
pub struct Cli {
    /// Directory holding board data and logs.
    #[arg(long, global = true, env = "FOCUSQUEST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend for the board.
    #[arg(long, global = true, value_enum, default_value_t = Backend::File)]
    pub backend: Backend,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "FOCUSQUEST_LOG")]
    pub log_level: Option<String>,

    /// Directory for rolling log files (default: `<data-dir>/logs`).
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the board.
    List,
    /// Add a quest to the Backlog.
    Add {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Move a Backlog quest to Doing.
    Start { id: String },
    /// Move a Doing quest to Done.
    Complete { id: String },
    /// Delete a quest in any stage.
    Delete { id: String },
    /// Remove every quest from the board.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print only the summary line.
    Summary,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// One JSON file per key inside the data directory.
    File,
    /// A SQLite database inside the data directory.
    Sqlite,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub backend: Backend,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Fills unset options with defaults. Relative paths are anchored at `cwd`.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Self {
        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(default_data_dir);
        let data_dir = absolutize(cwd, data_dir);
        let log_dir = cli
            .log_dir
            .clone()
            .map(|dir| absolutize(cwd, dir))
            .unwrap_or_else(|| data_dir.join(LOG_DIR_NAME));
        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| focusquest_core::default_log_level().to_string());

        Self {
            data_dir,
            backend: cli.backend,
            log_level,
            log_dir,
        }
    }

    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join(SQLITE_FILE_NAME)
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "focusquest", "focusquest")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("focusquest"))
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
