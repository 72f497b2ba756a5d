//! Move representation.

use crate::Square;
use std::fmt;

/// A chess move: a piece travels from one square to another.
///
/// The rule set has no promotion, castling or en passant, so a move is fully
/// described by its two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    ///
    /// Whether the move is legal is decided by the engine, not here.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_squares() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        let m = Move::new(e2, e4);

        assert_eq!(m.from(), e2);
        assert_eq!(m.to(), e4);
        assert_eq!(m.from().index(), 52);
        assert_eq!(m.to().index(), 36);
    }

    #[test]
    fn move_uci() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(Move::new(e2, e4).to_uci(), "e2e4");
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from().to_algebraic(), "e2");
        assert_eq!(m.to().to_algebraic(), "e4");

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
    }

    #[test]
    fn move_from_uci_edge_cases() {
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e2e").is_none());
        // Promotion suffixes are not part of this rule set
        assert!(Move::from_uci("e7e8q").is_none());
        assert!(Move::from_uci("é2e4").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::from_uci("g1f3").unwrap();
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}
