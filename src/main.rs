//! Terminal bowling scorer (default binary).
//!
//! Prints an example game, then scores balls typed on stdin. The scoreboard goes
//! to stdout; logs go to stderr and are filtered by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tenpin::app;
use tenpin::term::TerminalRenderer;
use tenpin::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::debug!(?config, "starting");

    let mut term = TerminalRenderer::stdout(config.color);
    app::run(&config, io::stdin().lock(), &mut term)?;

    Ok(())
}
