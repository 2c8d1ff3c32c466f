//! Session layer: drives one [`tenpin_core::Game`] from parsed commands.
//!
//! The scoring engine only knows about balls. This crate adds what an interactive
//! front end needs on top of it: starting over, quitting, and rolling straight
//! into a new game once the current one is finished.

pub mod session;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use session::{Outcome, Session};
