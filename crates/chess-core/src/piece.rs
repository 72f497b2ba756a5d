//! Chess piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
///
/// A piece on the board is a `(Piece, Color)` pair; pieces carry no identity
/// beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 300,
            Piece::Bishop => 300,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 10_000,
        }
    }

    /// Returns the FEN character for this piece with the given color.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece and color.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }

    /// Unicode glyph drawn on the board for this piece.
    pub const fn symbol(self, color: Color) -> char {
        match (color, self) {
            (Color::White, Piece::King) => '♔',
            (Color::White, Piece::Queen) => '♕',
            (Color::White, Piece::Rook) => '♖',
            (Color::White, Piece::Bishop) => '♗',
            (Color::White, Piece::Knight) => '♘',
            (Color::White, Piece::Pawn) => '♙',
            (Color::Black, Piece::King) => '♚',
            (Color::Black, Piece::Queen) => '♛',
            (Color::Black, Piece::Rook) => '♜',
            (Color::Black, Piece::Bishop) => '♝',
            (Color::Black, Piece::Knight) => '♞',
            (Color::Black, Piece::Pawn) => '♟',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_fen() {
        assert_eq!(Piece::Pawn.to_fen_char(Color::White), 'P');
        assert_eq!(Piece::Pawn.to_fen_char(Color::Black), 'p');
        assert_eq!(Piece::King.to_fen_char(Color::White), 'K');
        assert_eq!(Piece::Knight.to_fen_char(Color::Black), 'n');
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(Piece::from_fen_char('P'), Some((Piece::Pawn, Color::White)));
        assert_eq!(Piece::from_fen_char('p'), Some((Piece::Pawn, Color::Black)));
        assert_eq!(Piece::from_fen_char('K'), Some((Piece::King, Color::White)));
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn values_follow_the_classic_scale() {
        assert_eq!(Piece::Pawn.value(), 100);
        assert_eq!(Piece::Knight.value(), Piece::Bishop.value());
        assert_eq!(Piece::Rook.value(), 500);
        assert_eq!(Piece::Queen.value(), 900);
        assert_eq!(Piece::King.value(), 100 * Piece::Pawn.value());
    }

    #[test]
    fn symbols_differ_by_color() {
        for piece in Piece::ALL {
            assert_ne!(piece.symbol(Color::White), piece.symbol(Color::Black));
        }
        assert_eq!(Piece::King.symbol(Color::White), '♔');
        assert_eq!(Piece::Pawn.symbol(Color::Black), '♟');
    }
}
