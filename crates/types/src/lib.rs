//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring engine, scoreboard rendering, input parsing).
//!
//! # Game Dimensions
//!
//! Standard ten-pin rules, fixed:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FINAL_FRAME` | 10 | Regulation frames per game |
//! | `FIRST_BONUS_FRAME` | 11 | Slot holding fill balls after a 10th-frame mark |
//! | `SECOND_BONUS_FRAME` | 12 | Slot holding the last fill ball after a strike |
//! | `MAX_FRAMES` | 12 | Total frame slots tracked by a game |
//! | `NUM_PINS` | 10 | Pins racked per frame |
//!
//! Frame numbers above are 1-based; every index into a game is 0-based, so the
//! tenth frame lives at `FINAL_FRAME - 1`.
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{Command, Frame, Throw, MAX_FRAMES, NUM_PINS};
//!
//! let frame = Frame::default();
//! assert!(frame.pins_on_first_roll.is_none());
//! assert_eq!(frame.total_score, 0);
//!
//! assert_eq!(Throw::from_str("X"), Some(Throw::Strike));
//! assert_eq!(Command::from_str("quit"), Some(Command::Quit));
//!
//! assert_eq!(MAX_FRAMES, 12);
//! assert_eq!(NUM_PINS, 10);
//! ```

/// Regulation frames per game (1-based number of the last scoring frame)
pub const FINAL_FRAME: usize = 10;

/// 1-based number of the first bonus-only slot
pub const FIRST_BONUS_FRAME: usize = FINAL_FRAME + 1;

/// 1-based number of the second bonus-only slot
pub const SECOND_BONUS_FRAME: usize = FINAL_FRAME + 2;

/// Total frame slots held by a game (10 scoring + 2 bonus)
pub const MAX_FRAMES: usize = FINAL_FRAME + 2;

/// Pins standing at the start of every frame
pub const NUM_PINS: u32 = 10;

/// Future rolls credited to a frame that ends in a spare
pub const SPARE_BONUS_ROLLS: u8 = 1;

/// Future rolls credited to a frame that ends in a strike
pub const STRIKE_BONUS_ROLLS: u8 = 2;

/// Width of the `v`/`^` band drawn around the active frame on the scoreboard
pub const MARKER_WIDTH: usize = 48;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ten_pin_dimensions() {
        assert_eq!(FINAL_FRAME, 10);
        assert_eq!(FIRST_BONUS_FRAME, 11);
        assert_eq!(SECOND_BONUS_FRAME, 12);
        assert_eq!(MAX_FRAMES, 12);
        assert_eq!(NUM_PINS, 10);

        assert_eq!(SPARE_BONUS_ROLLS, 1);
        assert_eq!(STRIKE_BONUS_ROLLS, 2);
    }

    #[test]
    fn throw_parsing_is_case_insensitive() {
        assert_eq!(Throw::from_str("x"), Some(Throw::Strike));
        assert_eq!(Throw::from_str("X"), Some(Throw::Strike));
        assert_eq!(Throw::from_str("/"), Some(Throw::Spare));
        assert_eq!(Throw::from_str("7"), Some(Throw::Pins(7)));
        assert_eq!(Throw::from_str("seven"), None);
    }

    #[test]
    fn command_keywords() {
        for quit in ["q", "QUIT", "exit", "Stop"] {
            assert_eq!(Command::from_str(quit), Some(Command::Quit));
        }
        for reset in ["r", "reset", "Restart"] {
            assert_eq!(Command::from_str(reset), Some(Command::Reset));
        }
        assert_eq!(Command::from_str("bowl"), None);
    }

    #[test]
    fn throw_labels() {
        assert_eq!(Throw::Strike.as_str(), "strike");
        assert_eq!(Throw::Spare.as_str(), "spare");
        assert_eq!(Throw::Pins(3).as_str(), "pins");
    }
}

/// One frame slot of a game
///
/// Slots 0-9 are the regulation frames. Slots 10 and 11 never score on their own;
/// they only hold the fill balls earned by a strike or spare in the tenth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    /// Future rolls whose pins are still owed to this frame.
    pub bonus_rolls: u8,
    /// Pins credited to this frame alone, bonus pins included.
    pub current_score: u32,
    pub is_spare: bool,
    pub is_strike: bool,
    pub pins_on_first_roll: Option<u32>,
    pub pins_on_second_roll: Option<u32>,
    /// Running game total through this frame; stays 0 until the frame resolves.
    pub total_score: u32,
}

impl Frame {
    /// Whether this frame has taken every roll it will take and collected every bonus.
    pub fn is_resolved(&self) -> bool {
        self.bonus_rolls == 0
            && (self.is_strike || self.pins_on_second_roll.is_some())
    }

    /// Pins still standing after the first roll, if one was made.
    pub fn pins_remaining(&self) -> Option<u32> {
        self.pins_on_first_roll
            .map(|first| NUM_PINS.saturating_sub(first))
    }
}

/// A single ball as requested by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throw {
    /// Knock down exactly this many pins.
    Pins(u32),
    /// Knock down whatever is left standing in the current frame.
    Spare,
    /// Knock down all ten pins.
    Strike,
}

impl Throw {
    /// Parse a throw from its scoreboard notation (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::Throw;
    ///
    /// assert_eq!(Throw::from_str("x"), Some(Throw::Strike));
    /// assert_eq!(Throw::from_str("/"), Some(Throw::Spare));
    /// assert_eq!(Throw::from_str("4"), Some(Throw::Pins(4)));
    /// assert_eq!(Throw::from_str("-"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Throw::Strike),
            "/" => Some(Throw::Spare),
            other if other.bytes().all(|b| b.is_ascii_digit()) => {
                other.parse().ok().map(Throw::Pins)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Throw::Pins(_) => "pins",
            Throw::Spare => "spare",
            Throw::Strike => "strike",
        }
    }
}

/// An interactive command produced from one input token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Throw(Throw),
    /// Throw away the current game and start a new one.
    Reset,
    /// Stop reading input.
    Quit,
    /// Token that maps to nothing.
    Invalid,
}

impl Command {
    /// Parse the keyword commands (case-insensitive)
    ///
    /// Numeric tokens are handled by the input layer, which is more lenient than
    /// [`Throw::from_str`] about trailing characters.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "q" | "quit" | "exit" | "stop" => Some(Command::Quit),
            "r" | "reset" | "restart" => Some(Command::Reset),
            other => Throw::from_str(other).map(Command::Throw),
        }
    }
}
