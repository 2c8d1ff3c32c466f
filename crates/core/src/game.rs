//! Game module - the bowling scoring state machine
//!
//! A [`Game`] owns twelve [`Frame`] slots and a cursor naming the frame that
//! receives the next ball. Every accepted roll:
//!
//! 1. credits its pins to the current regulation frame,
//! 2. pays any bonus still owed to the frame two rounds back,
//! 3. pays any bonus still owed to the frame one round back,
//! 4. records itself as the first or second ball of the current frame and
//!    advances the cursor when that frame is done.
//!
//! Steps 2 and 3 are separate because after back-to-back strikes a single ball
//! is owed to two different earlier frames at once.
//!
//! A frame's `total_score` is written exactly once, when its last owed ball lands.
//! Until then it stays 0 and [`Game::score`] falls back to the newest resolved frame.

use tracing::{debug, trace};

use crate::error::GameError;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Frame, Throw, FINAL_FRAME, FIRST_BONUS_FRAME, MAX_FRAMES, NUM_PINS, SECOND_BONUS_FRAME,
    SPARE_BONUS_ROLLS, STRIKE_BONUS_ROLLS,
};

/// Index of the tenth frame.
const LAST_FRAME: usize = FINAL_FRAME - 1;
/// Index of the first bonus-only slot.
const FIRST_BONUS: usize = FIRST_BONUS_FRAME - 1;
/// Index of the second bonus-only slot.
const SECOND_BONUS: usize = SECOND_BONUS_FRAME - 1;

/// Score state for one bowler's game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Game {
    /// Frame currently receiving rolls. Only ever increases.
    current_round: usize,
    frames: [Frame; MAX_FRAMES],
}

impl Game {
    /// Create a fresh game: every frame empty, cursor on the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `pin_count` could be the next ball of `round`.
    ///
    /// A first ball may take up to a full rack; a second ball may only take what
    /// the first left standing.
    pub fn check_roll(&self, pin_count: u32, round: usize) -> bool {
        let Some(frame) = self.frames.get(round) else {
            return false;
        };

        match frame.pins_on_first_roll {
            None => pin_count <= NUM_PINS,
            Some(first) => first.saturating_add(pin_count) <= NUM_PINS,
        }
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round
    }

    /// Frame slot `index` (0-11), or `None` past the last bonus slot.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Current game total.
    ///
    /// The newest non-zero running total wins. Before any frame resolves this is
    /// the first frame's raw pin count.
    pub fn score(&self) -> u32 {
        self.frames
            .iter()
            .rev()
            .map(|frame| frame.total_score)
            .find(|&total| total > 0)
            .unwrap_or(self.frames[0].current_score)
    }

    /// Whether the game has taken its last ball.
    pub fn is_complete(&self) -> bool {
        if self.current_round <= LAST_FRAME {
            return false;
        }

        let tenth = &self.frames[LAST_FRAME];
        if self.current_round == FIRST_BONUS {
            // An open tenth frame never reaches the bonus slots.
            return !tenth.is_spare && !tenth.is_strike;
        }
        if self.current_round == SECOND_BONUS {
            return !(tenth.is_strike && tenth.bonus_rolls > 0);
        }

        true
    }

    /// Record one ball knocking down `pin_count` pins.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn roll(&mut self, pin_count: u32) -> Result<(), GameError> {
        if self.is_complete() {
            debug!(pins = pin_count, "roll after game complete");
            return Err(GameError::GameComplete);
        }

        let round = self.current_round;
        if pin_count > NUM_PINS || !self.check_roll(pin_count, round) {
            debug!(round, pins = pin_count, "invalid roll");
            return Err(GameError::InvalidRoll { pins: pin_count });
        }

        debug!(round, pins = pin_count, "roll accepted");

        if round <= LAST_FRAME {
            self.frames[round].current_score += pin_count;
        }

        if round >= 2 {
            self.credit_bonus(round - 2, pin_count);
        }
        if round >= 1 {
            self.credit_bonus(round - 1, pin_count);
        }

        let first_roll = self.frames[round].pins_on_first_roll;
        match first_roll {
            None => {
                self.frames[round].pins_on_first_roll = Some(pin_count);

                if pin_count == NUM_PINS {
                    let frame = &mut self.frames[round];
                    frame.bonus_rolls = STRIKE_BONUS_ROLLS;
                    frame.is_strike = true;
                    self.advance();
                } else if round == FIRST_BONUS && self.frames[LAST_FRAME].is_spare {
                    // A tenth-frame spare earns exactly one fill ball.
                    self.advance();
                } else if round == SECOND_BONUS
                    && self.frames[LAST_FRAME].is_strike
                    && self.frames[FIRST_BONUS].is_strike
                {
                    self.advance();
                }
            }
            Some(first) => {
                let base = self.total_before(round);
                let frame = &mut self.frames[round];
                frame.pins_on_second_roll = Some(pin_count);

                if first + pin_count == NUM_PINS {
                    frame.bonus_rolls = SPARE_BONUS_ROLLS;
                    frame.is_spare = true;
                } else {
                    frame.total_score = base + frame.current_score;
                    debug!(frame = round, total = frame.total_score, "frame resolved");
                }

                self.advance();
            }
        }

        Ok(())
    }

    /// Knock down whatever the current frame's first ball left standing.
    pub fn roll_spare(&mut self) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::GameComplete);
        }

        let remaining = self
            .frames
            .get(self.current_round)
            .and_then(Frame::pins_remaining)
            .ok_or(GameError::InvalidSpareState)?;

        self.roll(remaining)
    }

    pub fn roll_strike(&mut self) -> Result<(), GameError> {
        self.roll(NUM_PINS)
    }

    /// Dispatch a parsed [`Throw`] to the matching roll operation.
    pub fn play(&mut self, throw: Throw) -> Result<(), GameError> {
        match throw {
            Throw::Pins(pins) => self.roll(pins),
            Throw::Spare => self.roll_spare(),
            Throw::Strike => self.roll_strike(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            frames: self.frames,
            current_round: self.current_round,
            score: self.score(),
            complete: self.is_complete(),
        }
    }

    /// Pay one bonus ball to frame `index` if it is still owed one.
    fn credit_bonus(&mut self, index: usize, pins: u32) {
        if self.frames[index].bonus_rolls == 0 {
            return;
        }

        let base = self.total_before(index);
        let frame = &mut self.frames[index];
        frame.current_score += pins;
        frame.bonus_rolls -= 1;
        trace!(frame = index, pins, remaining = frame.bonus_rolls, "bonus credited");

        if frame.bonus_rolls == 0 {
            frame.total_score = base + frame.current_score;
            debug!(frame = index, total = frame.total_score, "frame resolved");
        }
    }

    /// Running total of the frame before `index`, or 0 for the first frame.
    fn total_before(&self, index: usize) -> u32 {
        index
            .checked_sub(1)
            .map_or(0, |prev| self.frames[prev].total_score)
    }

    fn advance(&mut self) {
        self.current_round += 1;
    }
}
