//! Text input module (session-facing).
//!
//! This module is independent of any terminal library. It maps whitespace
//! separated tokens typed at the prompt into [`crate::types::Command`]s.

pub mod map;

pub use tenpin_types as types;

pub use map::{parse_token, tokens};
