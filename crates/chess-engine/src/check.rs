//! Check, checkmate and stalemate detection.
//!
//! All functions are total: a board without a king of the given color is
//! simply never in check.

use crate::movegen::{has_legal_move, is_attacked_by};
use crate::Board;
use chess_core::Color;

/// Returns true if the king of `color` is attacked.
///
/// The king is the first one found scanning from a8 to h1. If there is none,
/// the side is reported as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked_by(board, king, color.opposite()),
        None => false,
    }
}

/// Returns true if `color` is in check and has no legal move.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns true if `color` is not in check but has no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_legal_move(board, color)
}
