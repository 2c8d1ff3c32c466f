//! Ten-pin bowling scorer (workspace facade crate).
//!
//! Re-exports the `tenpin::{core,engine,input,term,types}` API from the crates under
//! `crates/`, and hosts the pieces only the binary needs: configuration and the
//! interactive prompt loop.

pub mod app;
pub mod config;

pub use tenpin_core as core;
pub use tenpin_engine as engine;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;

pub use config::AppConfig;
