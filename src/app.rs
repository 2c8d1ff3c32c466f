//! Interactive prompt loop.
//!
//! Reads whitespace separated tokens, applies them to a [`Session`], and redraws
//! the scoreboard after every token. Ends on a quit token or end of input.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::core::example_game;
use crate::engine::Session;
use crate::input::{parse_token, tokens};
use crate::term::{ScoreboardView, TerminalRenderer};

const INSTRUCTIONS: [&str; 3] = [
    "Type 'q' to quit the game.",
    "Type 'r' to reset the game.",
    "Type a number 0-9 to bowl. x for strike, / for spare.",
];

/// Run the prompt until quit or end of input, returning the final session.
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    term: &mut TerminalRenderer<W>,
) -> Result<Session> {
    let view = ScoreboardView::default();

    if config.show_example {
        term.say("=== Example game ===")?;
        term.draw(&view, &example_game()?.snapshot())?;
        term.say("")?;
    }

    term.say("=== Main game ===")?;
    for line in INSTRUCTIONS {
        term.say(line)?;
    }

    let mut session = Session::new().with_auto_restart(config.auto_restart);
    show_board(&mut session, &view, term)?;

    'read: for line in input.lines() {
        let line = line?;
        for token in tokens(&line) {
            let outcome = session.apply(parse_token(token));
            if outcome.is_quit() {
                break 'read;
            }
            if let Some(message) = outcome.message() {
                term.say(&message)?;
            }
            show_board(&mut session, &view, term)?;
        }
    }

    info!(
        games = session.games_started(),
        score = session.game().score(),
        "session finished"
    );
    term.say("")?;
    term.draw(&view, &session.snapshot())?;

    Ok(session)
}

/// Draw the current board, rolling into a new game if this one just finished.
fn show_board<W: Write>(
    session: &mut Session,
    view: &ScoreboardView,
    term: &mut TerminalRenderer<W>,
) -> Result<()> {
    term.say("")?;
    term.draw(view, &session.snapshot())?;

    if session.restart_if_complete() {
        term.say("")?;
        term.say("=== Game complete. Starting a new one. ===")?;
        term.say("")?;
        term.draw(view, &session.snapshot())?;
    }

    Ok(())
}
