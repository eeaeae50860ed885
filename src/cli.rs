//! Command-line interface and the headless replay mode.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, instrument};

use crate::error::MoveListError;
use crate::game::{GameOutcome, GameState};
use crate::session::Session;

/// Two-player Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(name = "connect-four", version, about = "Two-player Connect Four in the terminal")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    pub config: PathBuf,

    /// Replay comma-separated 0-based columns without the TUI and print the result
    #[arg(long, value_name = "COLUMNS")]
    pub moves: Option<String>,

    /// Write logs to this file (overrides `logging.file`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print a config file with all default values and exit
    #[arg(long)]
    pub print_default_config: bool,
}

/// Parse a list such as `3,3,4` or `3 3 4` into column indices.
///
/// Only the syntax is checked here; out-of-range columns are passed through
/// and ignored by the game like any other invalid move.
pub fn parse_move_list(input: &str) -> Result<Vec<usize>, MoveListError> {
    let columns = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<usize>().map_err(|_| MoveListError::BadColumn {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(MoveListError::Empty);
    }
    Ok(columns)
}

/// Feed `columns` through a fresh session and return the final state.
#[instrument]
pub fn replay(columns: &[usize]) -> GameState {
    let mut session = Session::new();
    for &column in columns {
        if session.attempt_move(column).is_none() {
            debug!(column, "scripted move ignored");
        }
    }
    session.state().clone()
}

/// Board text followed by a one-line result.
pub fn report(state: &GameState) -> String {
    let mut out = state.board().to_string();
    let result = match state.outcome() {
        Some(GameOutcome::Winner(player)) => {
            format!("{} wins after {} moves", player.name(), state.moves())
        }
        Some(GameOutcome::Tie) => format!("Tie after {} moves", state.moves()),
        None => format!(
            "In progress after {} moves, {} to move",
            state.moves(),
            state.next_player().name()
        ),
    };
    out.push_str(&result);
    out.push('\n');
    out
}
