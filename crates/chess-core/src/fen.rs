//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! Only the fields the simplified rule set uses are read: piece placement and
//! the active color. Castling, en passant and the move clocks may be present
//! (so ordinary FEN strings are accepted) but are ignored.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
///
/// The engine turns this into its board representation; see
/// [`FenParser::cells`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Side to move. Defaults to White when the field is absent.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    squares += run;
                } else if Piece::from_fen_char(c).is_some() {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    /// Expands the placement into 64 cells in board index order.
    ///
    /// FEN lists rank 8 first, which is row 0 of the board, so the cells come
    /// out in the same order the board stores them.
    pub fn cells(&self) -> [Option<(Piece, Color)>; 64] {
        let mut cells = [None; 64];
        let mut index = 0usize;
        for c in self.piece_placement.chars() {
            if let Some(run) = c.to_digit(10) {
                index += run as usize;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if let Some(cell) = cells.get_mut(index) {
                    *cell = Some(piece);
                }
                index += 1;
            }
        }
        cells
    }

    /// Builds a placement string from 64 cells in board index order.
    pub fn placement_from_cells(cells: &[Option<(Piece, Color)>; 64]) -> String {
        let mut fen = String::new();
        for (row, rank) in cells.chunks(8).enumerate() {
            let mut empty_count = 0;
            for cell in rank {
                match cell {
                    Some((piece, color)) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char(*color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.piece_placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn placement_only_defaults_to_white() {
        let fen = FenParser::parse("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(fen.active_color, Color::White);
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let fen = FenParser::parse("4k3/8/8/8/8/8/8/4K3 b KQkq e3 0 1").unwrap();
        assert_eq!(fen.active_color, Color::Black);
    }

    #[test]
    fn cells_follow_board_index_order() {
        let cells = FenParser::default().cells();
        assert_eq!(cells[0], Some((Piece::Rook, Color::Black)));
        assert_eq!(cells[4], Some((Piece::King, Color::Black)));
        assert_eq!(cells[52], Some((Piece::Pawn, Color::White)));
        assert_eq!(cells[60], Some((Piece::King, Color::White)));
        assert!(cells[16..48].iter().all(Option::is_none));
    }

    #[test]
    fn placement_roundtrip() {
        let original = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let parsed = FenParser::parse(original).unwrap();
        assert_eq!(FenParser::placement_from_cells(&parsed.cells()), original);
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            FenParser::parse(""),
            Err(FenError::InvalidPartCount(0))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(7);
        assert!(format!("{}", err).contains('7'));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains('x'));

        let err = FenError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
