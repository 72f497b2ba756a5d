//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn move.
    ///
    /// Row 0 is the top of the board, so White pawns walk towards lower rows.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the row this color's pieces start on (7 for White, 0 for Black).
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the row this color's pawns start on (6 for White, 1 for Black).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Sign applied to scores: +1 for White, -1 for Black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Parses "white"/"black" (or "w"/"b"), ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Some(Color::White),
            "black" | "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// Lowercase name used by front ends.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn pawn_direction_points_at_opponent() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }

    #[test]
    fn starting_rows() {
        assert_eq!(Color::White.back_row(), 7);
        assert_eq!(Color::Black.back_row(), 0);
        assert_eq!(Color::White.pawn_row(), 6);
        assert_eq!(Color::Black.pawn_row(), 1);
    }

    #[test]
    fn from_name() {
        assert_eq!(Color::from_name("white"), Some(Color::White));
        assert_eq!(Color::from_name("B"), Some(Color::Black));
        assert_eq!(Color::from_name("red"), None);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
        let c: Color = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(c, Color::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
