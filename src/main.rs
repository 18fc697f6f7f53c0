//! Command-line client for the Shortifier URL shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! shortifier shorten https://example.com/some/long/path
//!
//! # Shorten with an expiration and copy the result
//! shortifier shorten https://example.com --expires-at 2030-01-01T00:00 --copy
//!
//! # Work with the local history (indices are 1-based)
//! shortifier history list
//! shortifier history copy 2
//! shortifier history delete 2
//! shortifier history clear
//!
//! # Prompt-driven session
//! shortifier interactive
//! ```
//!
//! # Environment Variables
//!
//! See [`shortifier::config`].

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

use shortifier::application::ShortifierSession;
use shortifier::config::{self, Config};
use shortifier::domain::entities::ShortenForm;
use shortifier::domain::repositories::HistoryStorage;
use shortifier::error::HistoryError;
use shortifier::infrastructure::http::HttpShortenerGateway;
use shortifier::infrastructure::storage::{FileHistoryStorage, MemoryHistoryStorage};
use shortifier::logging;
use shortifier::presentation::{ONE_SHOT_HOLD, SystemClipboard, TerminalView};

/// Client for the Shortifier URL shortening service.
#[derive(Parser)]
#[command(name = "shortifier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the shortening backend (overrides SHORTIFIER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// History file (overrides SHORTIFIER_HISTORY_FILE)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten (must start with http:// or https://)
        url: String,

        /// Expiration timestamp understood by the backend (e.g. 2030-01-01T00:00)
        #[arg(short, long)]
        expires_at: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Manage the local history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Shorten URLs from prompts until an empty line is entered
    Interactive,
}

/// History subcommands.
#[derive(Subcommand)]
enum HistoryAction {
    /// List recent URLs
    List,

    /// Copy a short URL to the clipboard
    Copy {
        /// Position in the list, starting at 1
        index: usize,
    },

    /// Delete one entry
    Delete {
        /// Position in the list, starting at 1
        index: usize,
    },

    /// Delete all entries
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

type Session<S> = ShortifierSession<HttpShortenerGateway, S, TerminalView, SystemClipboard>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load(cli.api_url, cli.history_file)
        .context("Invalid configuration")?;
    logging::init(&config.log_level, &config.log_format);
    config.print_summary();

    match config.history_file {
        Some(ref path) => run(cli.command, &config, FileHistoryStorage::new(path)).await,
        None => {
            tracing::warn!("No history file available, history will not be saved");
            run(cli.command, &config, MemoryHistoryStorage::new()).await
        }
    }
}

/// Builds the session for `command` and dispatches it.
async fn run<S: HistoryStorage>(command: Commands, config: &Config, storage: S) -> Result<ExitCode> {
    let gateway = Arc::new(HttpShortenerGateway::new(&config.api_base_url));

    let mut session = ShortifierSession::start(
        gateway,
        storage,
        initial_view(&command),
        clipboard_for(&command),
    );
    if shows_history_after_start(&command) {
        session.view_mut().show_history = true;
    }

    match command {
        Commands::Shorten {
            url,
            expires_at,
            copy,
        } => {
            let form = ShortenForm { url, expires_at };
            shorten(&mut session, &form, copy).await
        }
        Commands::History { action } => handle_history_action(&mut session, action),
        Commands::Interactive => interactive(&mut session).await,
    }
}

/// View used while the session starts; only listing commands print the
/// history loaded at startup.
fn initial_view(command: &Commands) -> TerminalView {
    match command {
        Commands::History {
            action: Some(HistoryAction::Clear { yes }),
        } => TerminalView::new(*yes, false),
        Commands::History {
            action: None | Some(HistoryAction::List),
        }
        | Commands::Interactive => TerminalView::new(false, true),
        Commands::Shorten { .. } | Commands::History { .. } => TerminalView::new(false, false),
    }
}

/// Commands that print the history once, after changing it.
fn shows_history_after_start(command: &Commands) -> bool {
    matches!(
        command,
        Commands::History {
            action: Some(HistoryAction::Delete { .. } | HistoryAction::Clear { .. }),
        }
    )
}

/// One-shot copies must outlive the process on X11/Wayland.
fn clipboard_for(command: &Commands) -> SystemClipboard {
    match command {
        Commands::Shorten { copy: true, .. }
        | Commands::History {
            action: Some(HistoryAction::Copy { .. }),
        } => SystemClipboard::one_shot(ONE_SHOT_HOLD),
        _ => SystemClipboard::new(),
    }
}

fn print_hold_hint() {
    if cfg!(target_os = "linux") {
        println!(
            "  {}",
            format!(
                "Keeping the clipboard for up to {}s, paste it now",
                ONE_SHOT_HOLD.as_secs()
            )
            .bright_black()
        );
    }
}

/// Submits one form; optionally copies the result.
async fn shorten<S: HistoryStorage>(
    session: &mut Session<S>,
    form: &ShortenForm,
    copy: bool,
) -> Result<ExitCode> {
    match session.submit(form).await {
        Ok(_) => {
            if copy && session.copy_result() {
                print_hold_hint();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

/// Dispatches history subcommands. The list itself is rendered by the session.
fn handle_history_action<S: HistoryStorage>(
    session: &mut Session<S>,
    action: Option<HistoryAction>,
) -> Result<ExitCode> {
    let outcome = match action.unwrap_or(HistoryAction::List) {
        HistoryAction::List => Ok(()),
        HistoryAction::Copy { index } => to_zero_based(index, session.history().len())
            .and_then(|i| session.copy_history_item(i))
            .inspect(|_| print_hold_hint()),
        HistoryAction::Delete { index } => to_zero_based(index, session.history().len())
            .and_then(|i| session.delete_history_item(i))
            .map(|_| ()),
        HistoryAction::Clear { .. } => {
            if !session.clear_history() {
                println!("{}", "❌ Cancelled".red());
            }
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(HistoryError::IndexOutOfRange { len, .. }) => {
            eprintln!("{} {}", "❌".red(), out_of_range_message(len));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prompt loop standing in for the web form.
///
/// Commands at the URL prompt:
/// - `:copy` - copy the last result
/// - `:copy N` / `:delete N` - copy or delete history entry N
/// - `:clear` - clear the history (asks first)
/// - `:history` - show the history again
/// - empty line - quit
async fn interactive<S: HistoryStorage>(session: &mut Session<S>) -> Result<ExitCode> {
    println!("{}", "🔗 Shortifier".bright_blue().bold());
    println!(
        "  {}",
        "Enter a URL to shorten, :help for commands, empty line to quit".bright_black()
    );
    println!();

    loop {
        let line: String = Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        if let Some(command) = line.strip_prefix(':') {
            run_interactive_command(session, command);
            continue;
        }

        let expires_at: String = Input::new()
            .with_prompt("Expires at (optional)")
            .allow_empty(true)
            .interact_text()?;

        let form = ShortenForm {
            url: line.to_string(),
            expires_at: Some(expires_at),
        };
        // Errors are already shown by the view
        let _ = session.submit(&form).await;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_interactive_command<S: HistoryStorage>(session: &mut Session<S>, command: &str) {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let len = session.history().len();
    let index = parts.next().map(|raw| {
        raw.parse::<usize>()
            .map_err(|_| HistoryError::IndexOutOfRange { index: 0, len })
            .and_then(|position| to_zero_based(position, len))
    });

    let outcome = match (name, index) {
        ("copy", None) => {
            if !session.copy_result() {
                println!("{}", "  Nothing to copy yet".yellow());
            }
            Ok(())
        }
        ("copy", Some(index)) => index.and_then(|i| session.copy_history_item(i)),
        ("delete", Some(index)) => index.and_then(|i| session.delete_history_item(i).map(|_| ())),
        ("clear", None) => {
            if !session.clear_history() {
                println!("{}", "❌ Cancelled".red());
            }
            Ok(())
        }
        ("history", None) => {
            session.render_history();
            Ok(())
        }
        _ => {
            println!(
                "  {}",
                ":copy [N]  :delete N  :clear  :history  (empty line quits)".bright_black()
            );
            Ok(())
        }
    };

    if let Err(HistoryError::IndexOutOfRange { len, .. }) = outcome {
        println!("  {}", out_of_range_message(len).yellow());
    }
}

/// Converts a 1-based position from the command line to a list index.
///
/// Position 0 is rejected here; positions past the end are left to the session.
fn to_zero_based(position: usize, len: usize) -> Result<usize, HistoryError> {
    position
        .checked_sub(1)
        .ok_or(HistoryError::IndexOutOfRange { index: 0, len })
}

fn out_of_range_message(len: usize) -> String {
    match len {
        0 => "History is empty".to_string(),
        1 => "No such entry, the only entry is 1".to_string(),
        _ => format!("No such entry, pick a number between 1 and {len}"),
    }
}
