//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the ten-pin scoring rules and nothing else. It has
//! **zero dependencies** on terminal I/O or input parsing, making it:
//!
//! - **Deterministic**: The same sequence of balls always produces the same card
//! - **Testable**: Every rule is exercised by unit tests next to the code
//! - **Portable**: Runs behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game`]: The scoring state machine ([`Game`])
//! - [`error`]: Why a roll was rejected ([`GameError`])
//! - [`snapshot`]: Copyable read-only view for renderers
//! - [`example`]: The canned example game shown at startup
//!
//! # Scoring Rules
//!
//! - **Open frame**: two balls, scored as pins knocked down
//! - **Spare**: ten pins over two balls, plus the next ball
//! - **Strike**: ten pins on the first ball, plus the next two balls
//! - **Tenth frame**: a mark earns fill balls, held in two bonus-only slots
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, GameError};
//!
//! let mut game = Game::new();
//! game.roll(8).unwrap();
//! game.roll_spare().unwrap();
//! game.roll(5).unwrap();
//!
//! // The spare collected the 5 as its bonus.
//! assert_eq!(game.frame(0).unwrap().total_score, 15);
//!
//! // Only five pins are left standing.
//! assert_eq!(game.roll(6), Err(GameError::InvalidRoll { pins: 6 }));
//! ```

pub mod error;
pub mod example;
pub mod game;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use example::{example_game, EXAMPLE_THROWS};
pub use game::Game;
pub use snapshot::GameSnapshot;
