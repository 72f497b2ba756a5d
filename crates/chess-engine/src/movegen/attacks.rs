//! Reverse attack detection.
//!
//! Instead of generating every opposing piece's moves, walk outwards from the
//! target square and look for a piece that could reach it. For a square held
//! by the side being attacked this gives the same answer as scanning the
//! attackers' basic moves: pawn pushes never land on an occupied square, so
//! only pawn diagonals matter.

use super::pieces::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::Board;
use chess_core::{Color, Piece, Square};

/// Returns true if a piece of color `by` has `sq` among its basic moves,
/// assuming `sq` is occupied by the other color.
pub(crate) fn is_attacked_by(board: &Board, sq: Square, by: Color) -> bool {
    // A pawn of `by` attacks one row ahead of itself, so look one row back.
    let back = -by.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(from) = sq.offset(back, d_col) {
            if board.piece_at(from) == Some((Piece::Pawn, by)) {
                return true;
            }
        }
    }

    if hits_stepper(board, sq, by, &KNIGHT_OFFSETS, Piece::Knight)
        || hits_stepper(board, sq, by, &KING_OFFSETS, Piece::King)
    {
        return true;
    }

    hits_slider(board, sq, by, &ROOK_DIRECTIONS, Piece::Rook)
        || hits_slider(board, sq, by, &BISHOP_DIRECTIONS, Piece::Bishop)
}

fn hits_stepper(
    board: &Board,
    sq: Square,
    by: Color,
    offsets: &[(i8, i8)],
    piece: Piece,
) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        sq.offset(d_row, d_col)
            .is_some_and(|from| board.piece_at(from) == Some((piece, by)))
    })
}

/// `piece` is the slider moving along `directions`; queens move along both.
fn hits_slider(
    board: &Board,
    sq: Square,
    by: Color,
    directions: &[(i8, i8)],
    piece: Piece,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = sq;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some((found, color)) = board.piece_at(next) {
                if color == by && (found == piece || found == Piece::Queen) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
