//! Per-cell descriptors for front ends.

use crate::check::is_king_in_check;
use crate::game::GameSession;
use chess_core::Square;
use serde::Serialize;

/// Why a cell is drawn highlighted. Only the strongest reason is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    None,
    Selected,
    LegalTarget,
    Check,
    LastMove,
}

/// Everything a renderer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: u8,
    pub symbol: Option<char>,
    pub highlight: Highlight,
    pub dark: bool,
}

impl GameSession {
    /// Describes all 64 cells in board index order.
    ///
    /// Priority when several highlights apply: selected, legal target, the
    /// checked king, then the squares of the last move.
    pub fn cells(&self) -> Vec<CellView> {
        let board = self.board();
        let targets = self.legal_targets();

        let to_move = self.current_player();
        let checked_king = if is_king_in_check(board, to_move) {
            board.king_square(to_move)
        } else {
            None
        };

        Square::all()
            .map(|sq| {
                let highlight = if self.selected() == Some(sq) {
                    Highlight::Selected
                } else if targets.contains(sq) {
                    Highlight::LegalTarget
                } else if checked_king == Some(sq) {
                    Highlight::Check
                } else if self
                    .last_move()
                    .is_some_and(|m| m.from() == sq || m.to() == sq)
                {
                    Highlight::LastMove
                } else {
                    Highlight::None
                };

                CellView {
                    index: sq.index(),
                    symbol: board.piece_at(sq).map(|(piece, color)| piece.symbol(color)),
                    highlight,
                    dark: sq.is_dark(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{SessionConfig, Status};
    use chess_core::{Color, Move};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn cell(cells: &[CellView], s: &str) -> CellView {
        cells[sq(s).index() as usize]
    }

    #[test]
    fn initial_cells() {
        let cells = GameSession::default().cells();
        assert_eq!(cells.len(), 64);
        assert!(cells.iter().enumerate().all(|(i, c)| c.index as usize == i));
        assert!(cells.iter().all(|c| c.highlight == Highlight::None));
        assert_eq!(cell(&cells, "e1").symbol, Some('♔'));
        assert_eq!(cell(&cells, "e8").symbol, Some('♚'));
        assert_eq!(cell(&cells, "e4").symbol, None);
        assert!(cell(&cells, "a1").dark);
        assert!(!cell(&cells, "h1").dark);
    }

    #[test]
    fn selection_and_targets() {
        let mut session = GameSession::default();
        session.click(sq("g1"));
        let cells = session.cells();
        assert_eq!(cell(&cells, "g1").highlight, Highlight::Selected);
        assert_eq!(cell(&cells, "f3").highlight, Highlight::LegalTarget);
        assert_eq!(cell(&cells, "h3").highlight, Highlight::LegalTarget);
        assert_eq!(cell(&cells, "e2").highlight, Highlight::None);
    }

    #[test]
    fn checked_king_and_last_move() {
        let config = SessionConfig {
            human: Color::Black,
            search_depth: 1,
        };
        let fen = "4k3/8/8/8/8/8/8/4K2R b";
        let mut session = GameSession::from_fen(fen, config).unwrap();
        session.play_move(Move::from_uci("e8d8").unwrap()).unwrap();
        let cells = session.cells();
        assert_eq!(cell(&cells, "e8").highlight, Highlight::LastMove);
        assert_eq!(cell(&cells, "d8").highlight, Highlight::LastMove);

        let checked = GameSession::from_fen("4k3/8/8/8/8/8/8/4R2K b", config).unwrap();
        assert_eq!(checked.status(), Status::Check);
        assert_eq!(cell(&checked.cells(), "e8").highlight, Highlight::Check);
    }

    #[test]
    fn highlight_serializes_kebab_case() {
        let json = serde_json::to_string(&Highlight::LegalTarget).unwrap();
        assert_eq!(json, "\"legal-target\"");
        let json = serde_json::to_string(&Highlight::LastMove).unwrap();
        assert_eq!(json, "\"last-move\"");
    }
}
