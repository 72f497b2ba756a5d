//! Static evaluation: material plus a pawn advancement table.

use crate::Board;
use chess_core::{Color, Piece, Square};

/// Pawn bonus in centipawns, indexed by `[rows advanced from own back row][column]`.
///
/// Pawns start on index 1; index 7 is the far edge where, without promotion,
/// a pawn can no longer move.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Positional bonus of a pawn of `color` standing on `sq`.
#[inline]
fn pawn_bonus(sq: Square, color: Color) -> i32 {
    let advanced = sq.row().abs_diff(color.back_row()) as usize;
    PAWN_TABLE[advanced][sq.col() as usize]
}

/// Scores a position in centipawns; positive favors White.
///
/// Each piece contributes its value (plus the table bonus for pawns), signed
/// by color. No mobility, king safety or phase terms.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        if let Some((piece, color)) = board.piece_at(sq) {
            let mut value = piece.value();
            if piece == Piece::Pawn {
                value += pawn_bonus(sq, color);
            }
            score += color.sign() * value;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Move;

    #[test]
    fn initial_position_is_balanced() {
        assert_eq!(evaluate(&Board::initial()), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::empty()), 0);
    }

    #[test]
    fn extra_queen_is_worth_nine_pawns() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3").unwrap();
        assert_eq!(evaluate(&board), 900);
        let board = Board::from_fen("3qk3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(evaluate(&board), -900);
    }

    #[test]
    fn pawn_table_is_mirrored_for_black() {
        let white = Board::from_fen("4k3/8/8/8/3P4/8/8/4K3").unwrap();
        let black = Board::from_fen("4k3/8/8/3p4/8/8/8/4K3").unwrap();
        assert_eq!(evaluate(&white), 100 + 20);
        assert_eq!(evaluate(&black), -(100 + 20));
    }

    #[test]
    fn central_pawn_push_improves_score() {
        let board = Board::initial();
        let after = board.with_move(Move::from_uci("e2e4").unwrap());
        assert_eq!(evaluate(&after) - evaluate(&board), 40);
    }
}
