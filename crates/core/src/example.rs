//! The canned example game shown at startup.

use crate::error::GameError;
use crate::game::Game;
use crate::types::Throw;

/// `8/ 54 90 X X 5/ 53 63 9/ 9/X`: final score 149.
pub const EXAMPLE_THROWS: [Throw; 19] = [
    Throw::Pins(8),
    Throw::Spare,
    Throw::Pins(5),
    Throw::Pins(4),
    Throw::Pins(9),
    Throw::Pins(0),
    Throw::Strike,
    Throw::Strike,
    Throw::Pins(5),
    Throw::Spare,
    Throw::Pins(5),
    Throw::Pins(3),
    Throw::Pins(6),
    Throw::Pins(3),
    Throw::Pins(9),
    Throw::Spare,
    Throw::Pins(9),
    Throw::Spare,
    Throw::Strike,
];

/// Play [`EXAMPLE_THROWS`] into a fresh game.
pub fn example_game() -> Result<Game, GameError> {
    let mut game = Game::new();
    for throw in EXAMPLE_THROWS {
        game.play(throw)?;
    }
    Ok(game)
}
