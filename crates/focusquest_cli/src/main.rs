//! FocusQuest terminal front end.
//!
//! # Responsibility
//! - Hydrate the board once, apply one user action, render the result.
//! - Enforce the presentation rules: forward-only moves, confirmed clears.

mod config;
mod render;

use clap::Parser;
use config::{Backend, Cli, CliConfig, Command};
use focusquest_core::{
    available_actions, can_clear, init_logging, FileStore, KeyValueStore, QuestAction,
    QuestBoardService, QuestId, SaveOutcome, SqliteStore, StorageError,
    CLEAR_CONFIRMATION_PROMPT,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Debug)]
enum CliError {
    Storage(StorageError),
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to open storage: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<StorageError> for CliError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("focusquest: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::resolve(&cli, &std::env::current_dir()?);
    let log_dir = config.log_dir.to_string_lossy();
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("focusquest: logging disabled: {err}");
    }

    let mut service = QuestBoardService::new(open_storage(&config)?);
    let loaded = service.hydrate();
    info!(
        "event=cli_start module=cli status=ok backend={:?} loaded={loaded}",
        config.backend
    );

    let command = cli.command.unwrap_or(Command::List);
    if apply(&mut service, command, confirm_on_stdin)? {
        print!("{}", render::render_board(service.board()));
    }
    if service.last_save() == Some(SaveOutcome::Failed) {
        eprintln!("focusquest: warning: changes could not be saved; see log for details");
    }
    Ok(())
}

fn open_storage(config: &CliConfig) -> Result<Box<dyn KeyValueStore>, StorageError> {
    let store: Box<dyn KeyValueStore> = match config.backend {
        Backend::File => Box::new(FileStore::open(&config.data_dir)?),
        Backend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir).map_err(|source| StorageError::Io {
                path: config.data_dir.clone(),
                source,
            })?;
            Box::new(SqliteStore::open(config.sqlite_path())?)
        }
    };
    Ok(store)
}

/// Runs one command. Returns whether the full board should be printed.
///
/// `confirm` is asked before a clear unless `--yes` was given.
fn apply<S: KeyValueStore>(
    service: &mut QuestBoardService<S>,
    command: Command,
    confirm: impl FnOnce(&str) -> io::Result<bool>,
) -> Result<bool, CliError> {
    match command {
        Command::List => {}
        Command::Summary => {
            println!("{}", service.summary().summary_line());
            return Ok(false);
        }
        Command::Add { title, description } => {
            if service.add_quest(&title, description.as_deref()).is_none() {
                eprintln!("focusquest: a quest needs a title");
            }
        }
        Command::Start { id } => {
            run_action(service, &QuestId::new(id), QuestAction::Start);
        }
        Command::Complete { id } => {
            run_action(service, &QuestId::new(id), QuestAction::Complete);
        }
        Command::Delete { id } => {
            run_action(service, &QuestId::new(id), QuestAction::Delete);
        }
        Command::Clear { yes } => {
            if !can_clear(service.board()) {
                println!("The board is already empty.");
                return Ok(false);
            }
            let confirmed = if yes {
                true
            } else {
                confirm(CLEAR_CONFIRMATION_PROMPT)?
            };
            service.clear_all(|| confirmed);
        }
    }
    Ok(true)
}

/// Applies `action` only when the quest's current stage offers it.
///
/// Returns whether the board was touched.
fn run_action<S: KeyValueStore>(
    service: &mut QuestBoardService<S>,
    id: &QuestId,
    action: QuestAction,
) -> bool {
    let Some(status) = service.board().get(id).map(|quest| quest.status) else {
        eprintln!("focusquest: no quest with id `{id}`");
        return false;
    };
    if !available_actions(status).contains(&action) {
        eprintln!(
            "focusquest: `{}` is not available for a {status} quest",
            action.label()
        );
        return false;
    }

    match action.target_status() {
        Some(target) => service.set_status(id, target),
        None => service.delete_quest(id),
    }
    true
}

fn confirm_on_stdin(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
