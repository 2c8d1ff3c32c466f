//! Token mapping from typed text to session commands.

use crate::types::{Command, Throw};

/// Map one input token to a command.
///
/// Matching is case-insensitive. An empty token quits. A token starting with a
/// digit is read as a pin count from its leading digits, so `7th` is a 7.
pub fn parse_token(token: &str) -> Command {
    let token = token.trim();
    if token.is_empty() {
        return Command::Quit;
    }

    if let Some(command) = Command::from_str(token) {
        return command;
    }

    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return Command::Throw(Throw::Pins(leading_number(token)));
    }

    Command::Invalid
}

/// Split a line into the tokens [`parse_token`] expects.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Value of the leading ASCII digit run, saturating at `u32::MAX`.
fn leading_number(token: &str) -> u32 {
    token
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_tokens() {
        assert_eq!(parse_token("x"), Command::Throw(Throw::Strike));
        assert_eq!(parse_token("X"), Command::Throw(Throw::Strike));
        assert_eq!(parse_token("/"), Command::Throw(Throw::Spare));
        assert_eq!(parse_token("0"), Command::Throw(Throw::Pins(0)));
        assert_eq!(parse_token("10"), Command::Throw(Throw::Pins(10)));
    }

    #[test]
    fn test_numbers_use_leading_digits() {
        assert_eq!(parse_token("7th"), Command::Throw(Throw::Pins(7)));
        assert_eq!(parse_token("12"), Command::Throw(Throw::Pins(12)));
        assert_eq!(
            parse_token("99999999999999"),
            Command::Throw(Throw::Pins(u32::MAX))
        );
    }

    #[test]
    fn test_session_keywords() {
        for quit in ["", "q", "Q", "quit", "EXIT", "stop"] {
            assert_eq!(parse_token(quit), Command::Quit, "token {quit:?}");
        }
        for reset in ["r", "RESET", "restart"] {
            assert_eq!(parse_token(reset), Command::Reset, "token {reset:?}");
        }
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(parse_token("strike"), Command::Invalid);
        assert_eq!(parse_token("-1"), Command::Invalid);
        assert_eq!(parse_token("?"), Command::Invalid);
    }

    #[test]
    fn test_tokens_split_on_whitespace() {
        let parsed: Vec<Command> = tokens("  8 /\t5 4\n").map(parse_token).collect();
        assert_eq!(
            parsed,
            vec![
                Command::Throw(Throw::Pins(8)),
                Command::Throw(Throw::Spare),
                Command::Throw(Throw::Pins(5)),
                Command::Throw(Throw::Pins(4)),
            ]
        );
    }
}
