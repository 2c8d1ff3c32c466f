use tenpin::core::{example_game, Game};
use tenpin::term::{ScoreboardView, TerminalRenderer};
use tenpin::types::MARKER_WIDTH;

#[test]
fn example_game_board() {
    let snap = example_game().unwrap().snapshot();
    let text = ScoreboardView::default().render(&snap);

    let expected = "\
Round  1 - [ 8,  /]    Current:  15, Total:  15
Round  2 - [ 5,  4]    Current:   9, Total:  24
Round  3 - [ 9,  0]    Current:   9, Total:  33
Round  4 - [ X,  _]    Current:  25, Total:  58
Round  5 - [ X,  _]    Current:  20, Total:  78
Round  6 - [ 5,  /]    Current:  15, Total:  93
Round  7 - [ 5,  3]    Current:   8, Total: 101
Round  8 - [ 6,  3]    Current:   9, Total: 110
Round  9 - [ 9,  /]    Current:  19, Total: 129
Round 10 - [ 9,  /, X] Current:  20, Total: 149
";
    assert_eq!(text, expected);
}

#[test]
fn marker_follows_the_active_frame() {
    let mut game = Game::new();
    for pins in [3, 4, 10] {
        game.roll(pins).unwrap();
    }

    let text = ScoreboardView::default().render(&game.snapshot());
    let rows: Vec<&str> = text.lines().collect();
    let band = "v".repeat(MARKER_WIDTH);
    let pos = rows.iter().position(|row| *row == band).unwrap();

    assert!(rows[pos + 1].starts_with("Round  3 - ["));
    assert_eq!(rows[pos + 2], "^".repeat(MARKER_WIDTH));
    assert_eq!(rows[1], "Round  2 - [ X,  _]    Current:  10, Total:   0");
}

#[test]
fn tenth_frame_shows_open_fill_ball() {
    let mut game = Game::new();
    for pins in [0; 18] {
        game.roll(pins).unwrap();
    }
    for pins in [10, 7, 2] {
        game.roll(pins).unwrap();
    }

    let text = ScoreboardView::default().render(&game.snapshot());
    assert!(text.ends_with("Round 10 - [ X,  _, 7] Current:  19, Total:  19\n"));
}

#[test]
fn renderer_without_color_matches_plain_render() {
    let snap = example_game().unwrap().snapshot();
    let view = ScoreboardView::default();

    let mut term = TerminalRenderer::new(Vec::new(), false);
    term.draw(&view, &snap).unwrap();
    let written = String::from_utf8(term.into_inner()).unwrap();

    assert_eq!(written, view.render(&snap));
}
