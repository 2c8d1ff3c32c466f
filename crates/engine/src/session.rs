use tracing::{debug, info};

use crate::core::{Game, GameError, GameSnapshot};
use crate::types::{Command, Throw};

/// Result of applying one [`Command`] to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The ball was recorded.
    Played,
    /// The engine refused the ball; the game is unchanged.
    Rejected(GameError),
    /// A new game replaced the old one.
    Reset,
    /// The token did not map to a command.
    Invalid,
    Quit,
}

impl Outcome {
    pub fn code(self) -> &'static str {
        match self {
            Outcome::Played => "played",
            Outcome::Rejected(err) => err.as_str(),
            Outcome::Reset => "reset",
            Outcome::Invalid => "invalid_input",
            Outcome::Quit => "quit",
        }
    }

    /// Line to show the player, if any.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::Rejected(err) => Some(err.to_string()),
            Outcome::Invalid => Some("Invalid input".to_string()),
            Outcome::Played | Outcome::Reset | Outcome::Quit => None,
        }
    }

    pub fn is_quit(self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

/// One player at the lane: the current game plus restart policy.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    /// Games begun in this session, the current one included.
    games_started: u32,
    auto_restart: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        info!("new game started");
        Self {
            game: Game::new(),
            games_started: 1,
            auto_restart: true,
        }
    }

    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Apply one command to the current game.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Throw(throw) => self.play(throw),
            Command::Reset => {
                self.reset();
                Outcome::Reset
            }
            Command::Quit => Outcome::Quit,
            Command::Invalid => Outcome::Invalid,
        };

        debug!(outcome = outcome.code(), score = self.game.score(), "command applied");
        outcome
    }

    /// Replace the current game with a fresh one.
    pub fn reset(&mut self) {
        self.game = Game::new();
        self.games_started += 1;
        info!(game = self.games_started, "new game started");
    }

    /// Start over if the current game is finished and auto-restart is on.
    ///
    /// Returns whether a new game was started.
    pub fn restart_if_complete(&mut self) -> bool {
        if !self.auto_restart || !self.game.is_complete() {
            return false;
        }

        info!(final_score = self.game.score(), "game complete");
        self.reset();
        true
    }

    fn play(&mut self, throw: Throw) -> Outcome {
        match self.game.play(throw) {
            Ok(()) => Outcome::Played,
            Err(err) => Outcome::Rejected(err),
        }
    }
}
