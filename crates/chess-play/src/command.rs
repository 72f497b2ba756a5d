//! Parsing of lines typed at the prompt.

use chess_core::Move;

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A move in coordinate form, e.g. `e2e4`.
    Move(Move),
    /// Start a new game.
    New,
    /// Redraw the board.
    Board,
    Help,
    Quit,
    /// Blank line.
    Empty,
    Unknown(String),
}

impl Command {
    /// Parses one line, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "new" => Command::New,
            "board" => Command::Board,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            lower => match Move::from_uci(lower) {
                Some(m) => Command::Move(m),
                None => Command::Unknown(input.to_string()),
            },
        }
    }
}

pub const HELP: &str = "\
Commands:
  e2e4    move a piece (from square, to square)
  new     start a new game
  board   show the board
  help    show this help
  quit    leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("new\n"), Command::New);
        assert_eq!(Command::parse("  QUIT "), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("board"), Command::Board);
    }

    #[test]
    fn parse_moves() {
        assert_eq!(
            Command::parse("e2e4"),
            Command::Move(Move::from_uci("e2e4").unwrap())
        );
        assert_eq!(
            Command::parse("G1F3"),
            Command::Move(Move::from_uci("g1f3").unwrap())
        );
        assert_eq!(Command::parse("e2e9"), Command::Unknown("e2e9".to_string()));
        assert_eq!(Command::parse("castle"), Command::Unknown("castle".to_string()));
    }
}
