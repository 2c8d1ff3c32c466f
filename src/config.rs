//! Runtime configuration for the terminal front end.
use std::env;

/// Front-end settings. Scoring rules are fixed and never configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Print the canned example game before the prompt.
    pub show_example: bool,
    /// Style the scoreboard with terminal colors.
    pub color: bool,
    /// Start a new game as soon as the current one is complete.
    pub auto_restart: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_example: true,
            color: true,
            auto_restart: true,
        }
    }
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TENPIN_SHOW_EXAMPLE` - Print the example game (default: true)
    /// - `TENPIN_COLOR` - Colored scoreboard (default: true; `NO_COLOR` forces false)
    /// - `TENPIN_AUTO_RESTART` - New game after completion (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(show) = read_env_bool("TENPIN_SHOW_EXAMPLE") {
            config.show_example = show;
        }
        if let Some(color) = read_env_bool("TENPIN_COLOR") {
            config.color = color;
        }
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        if let Some(restart) = read_env_bool("TENPIN_AUTO_RESTART") {
            config.auto_restart = restart;
        }

        config
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
