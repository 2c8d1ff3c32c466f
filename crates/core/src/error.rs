//! Errors returned by the scoring engine.
//!
//! Every variant is recoverable: the rejected roll leaves the game untouched and
//! the caller decides whether to retry, ignore, or abort.

use thiserror::Error;

/// Why a roll was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GameError {
    /// The game has already taken its last ball.
    #[error("Game complete.")]
    GameComplete,

    /// More pins than are standing, or more than a full rack.
    #[error("Invalid roll - Pin count: {pins}")]
    InvalidRoll { pins: u32 },

    /// A spare was requested before the frame's first ball.
    #[error("Invalid spare roll")]
    InvalidSpareState,
}

impl GameError {
    /// Short machine-friendly label, used as a structured log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameComplete => "game_complete",
            Self::InvalidRoll { .. } => "invalid_roll",
            Self::InvalidSpareState => "invalid_spare_state",
        }
    }
}
