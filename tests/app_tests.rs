//! Prompt loop driven from in-memory input

use std::io::Cursor;

use tenpin::app;
use tenpin::engine::Session;
use tenpin::term::TerminalRenderer;
use tenpin::AppConfig;

fn quiet_config() -> AppConfig {
    AppConfig {
        show_example: false,
        color: false,
        auto_restart: true,
    }
}

fn run_with(config: &AppConfig, input: &str) -> (Session, String) {
    let mut term = TerminalRenderer::new(Vec::new(), config.color);
    let session = app::run(config, Cursor::new(input.to_owned()), &mut term).unwrap();
    let output = String::from_utf8(term.into_inner()).unwrap();
    (session, output)
}

#[test]
fn test_example_and_instructions_are_printed() {
    let config = AppConfig {
        color: false,
        ..AppConfig::default()
    };
    let (_, output) = run_with(&config, "");

    assert!(output.starts_with("=== Example game ===\n"));
    assert!(output.contains("Round 10 - [ 9,  /, X] Current:  20, Total: 149"));
    assert!(output.contains("=== Main game ===\n"));
    assert!(output.contains("x for strike, / for spare."));
}

#[test]
fn test_tokens_score_the_game() {
    let (session, output) = run_with(&quiet_config(), "8 /\n5\n");

    assert_eq!(session.game().score(), 15);
    assert!(output.contains("Round  1 - [ 8,  /]    Current:  15, Total:  15"));
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_with(&quiet_config(), "3 QUIT 4\n5\n");

    let frame = session.game().frame(0).unwrap();
    assert_eq!(frame.pins_on_first_roll, Some(3));
    assert_eq!(frame.pins_on_second_roll, None);
}

#[test]
fn test_errors_are_reported_and_play_continues() {
    let (session, output) = run_with(&quiet_config(), "11 / bowl 6 7 3\n");

    assert!(output.contains("Invalid roll - Pin count: 11\n"));
    assert!(output.contains("Invalid spare roll\n"));
    assert!(output.contains("Invalid input\n"));
    assert!(output.contains("Invalid roll - Pin count: 7\n"));
    assert_eq!(session.game().frame(0).unwrap().total_score, 9);
}

#[test]
fn test_reset_clears_the_board() {
    let (session, _) = run_with(&quiet_config(), "x 5 r 2\n");

    assert_eq!(session.games_started(), 2);
    assert_eq!(session.game().frame(0).unwrap().pins_on_first_roll, Some(2));
}

#[test]
fn test_completed_game_restarts() {
    let (session, output) = run_with(&quiet_config(), &"x ".repeat(12));

    assert!(output.contains("Total: 300"));
    assert!(output.contains("=== Game complete. Starting a new one. ===\n"));
    assert_eq!(session.games_started(), 2);
    assert_eq!(session.game().score(), 0);
}

#[test]
fn test_completed_game_kept_without_auto_restart() {
    let config = AppConfig {
        auto_restart: false,
        ..quiet_config()
    };
    let (session, output) = run_with(&config, &"x ".repeat(13));

    assert!(!output.contains("Starting a new one"));
    assert!(output.contains("Game complete.\n"));
    assert_eq!(session.game().score(), 300);
}
