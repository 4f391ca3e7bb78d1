use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, warn};
use rchess_core::json::{BoardStateJson, ReplayResultJson};
use rchess_core::{Arbiter, MoveOutcome};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replays moves from the standard position and prints the resulting board"
)]
struct Cli {
    /// Moves in coordinate notation, e.g. e2e4 e7e5
    moves: Vec<String>,

    /// Read additional whitespace separated moves from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Stop at the first rejected move (`--stop-on-illegal false` skips it)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    stop_on_illegal: bool,
}

/// Why a move was not committed
fn rejection(text: &str, outcome: MoveOutcome) -> Option<String> {
    match outcome {
        MoveOutcome::Illegal => Some(format!("illegal move {text}")),
        MoveOutcome::LeavesKingInCheck => Some(format!("{text} leaves the king in check")),
        MoveOutcome::Played { .. } => None,
    }
}

/// Plays `moves` in order from the standard position.
fn replay(moves: &[String], stop_on_illegal: bool) -> Result<(Arbiter, ReplayResultJson)> {
    let mut arbiter = Arbiter::default();
    arbiter.place_standard_setup().context("failed to set up the board")?;

    let mut applied = Vec::new();
    let mut error = None;
    let mut check = false;
    for text in moves {
        let failure = match arbiter.play(text) {
            Ok(MoveOutcome::Played { check: gives_check }) => {
                check = gives_check;
                applied.push(text.clone());
                None
            }
            Ok(outcome) => rejection(text, outcome),
            Err(err) => Some(format!("{text}: {err}")),
        };
        if let Some(reason) = failure {
            warn!("{reason}");
            error = Some(reason);
            if stop_on_illegal {
                break;
            }
        }
    }

    let result = ReplayResultJson {
        applied,
        move_count: arbiter.move_count(),
        check,
        board: BoardStateJson::from_arbiter(&arbiter).context("failed to snapshot the board")?,
        error,
    };
    Ok((arbiter, result))
}

fn read_moves(cli: &Cli) -> Result<Vec<String>> {
    let mut moves = cli.moves.clone();
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        moves.extend(text.split_whitespace().map(str::to_string));
    }
    Ok(moves)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let moves = read_moves(&cli)?;
    info!("replaying {} moves", moves.len());
    let (arbiter, result) = replay(&moves, cli.stop_on_illegal)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", arbiter.board());
    if let Some(turn) = arbiter.turn() {
        println!("turn: {turn}");
    }
    println!("moves: {}", result.move_count);
    println!("check: {}", result.check);
    if let Some(error) = &result.error {
        println!("stopped: {error}");
    }
    Ok(())
}
