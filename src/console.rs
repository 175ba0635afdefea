//! Line-oriented console: turns stdin lines into engine actions and prints
//! the resulting snapshot.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Engine, GameState, MoveSelector, Position, UserAction};
use tracing::{debug, instrument};

const HELP: &str = "Commands: 1-9 or a cell name to move, r to play again, q to quit";

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forward an action to the engine.
    Action(UserAction),
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Parses one line of input. Returns `None` for anything unrecognized.
#[instrument]
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(ConsoleCommand::Quit),
        "r" | "again" | "reset" => Some(ConsoleCommand::Action(UserAction::PlayAgain)),
        "h" | "help" | "?" => Some(ConsoleCommand::Help),
        other => Position::parse(other)
            .map(|pos| ConsoleCommand::Action(UserAction::BoardTapped(pos))),
    }
}

/// Renders a snapshot as a text board with status and score lines.
pub fn render(state: &GameState) -> String {
    let tally = state.tally();
    let mut out = format!("{}\n{}\n", state.board(), state.status_text());
    if state.phase().is_terminal() {
        out.push_str("Type r to play again.\n");
    }
    out.push_str(&format!(
        "Score: you {}, computer {}, draws {}\n",
        tally.player_wins, tally.opponent_wins, tally.draws
    ));
    out
}

fn show<W: Write>(out: &mut W, state: &GameState, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(state).context("Failed to serialize snapshot")?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", render(state))?;
    }
    out.flush()?;
    Ok(())
}

/// Runs the session until `q` or end of input.
#[instrument(skip(engine, input, output))]
pub fn run<S, R, W>(engine: &mut Engine<S>, input: R, mut output: W, json: bool) -> Result<()>
where
    S: MoveSelector,
    R: BufRead,
    W: Write,
{
    if !json {
        writeln!(output, "{}", HELP)?;
    }
    show(&mut output, engine.state(), json)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_command(&line) {
            Some(ConsoleCommand::Quit) => break,
            Some(ConsoleCommand::Help) => writeln!(output, "{}", HELP)?,
            Some(ConsoleCommand::Action(action)) => {
                debug!(%action, "Dispatching");
                let state = engine.on_action(action);
                show(&mut output, state, json)?;
            }
            None => {
                debug!(line = %line, "Unrecognized input");
                writeln!(output, "Unrecognized input: {:?}. {}", line.trim(), HELP)?;
            }
        }
    }

    Ok(())
}
