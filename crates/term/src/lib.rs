//! Terminal scoreboard module.
//!
//! This is a small rendering layer for the interactive bowling prompt. It keeps
//! layout pure (snapshot in, styled lines out) and leaves byte output to
//! [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make the scoreboard layout testable as plain strings
//! - Allow color to be switched off without changing the layout

pub mod renderer;
pub mod scoreboard;
pub mod style;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use scoreboard::ScoreboardView;
pub use style::{Line, Rgb, Span, SpanStyle};
