//! Per-piece move rules.

use super::SquareList;
use crate::Board;
use chess_core::{Color, Piece, Square};

/// Knight jumps as `(row, col)` deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as `(row, col)` deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal rays: up, down, left, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal rays.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Appends the basic moves of `piece` on `from` to `targets`.
pub(super) fn generate(
    board: &Board,
    from: Square,
    piece: Piece,
    color: Color,
    targets: &mut SquareList,
) {
    match piece {
        Piece::Pawn => pawn_moves(board, from, color, targets),
        Piece::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS, targets),
        Piece::Bishop => ray_moves(board, from, color, &BISHOP_DIRECTIONS, targets),
        Piece::Rook => ray_moves(board, from, color, &ROOK_DIRECTIONS, targets),
        Piece::Queen => {
            ray_moves(board, from, color, &ROOK_DIRECTIONS, targets);
            ray_moves(board, from, color, &BISHOP_DIRECTIONS, targets);
        }
        Piece::King => step_moves(board, from, color, &KING_OFFSETS, targets),
    }
}

/// Forward pushes, then diagonal captures (towards the a-file first).
///
/// The two-step push only looks at its destination, so a start-row pawn can
/// still advance two when the square in front of it is taken.
fn pawn_moves(board: &Board, from: Square, color: Color, targets: &mut SquareList) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            targets.push(one);
        }
    }

    if from.row() == color.pawn_row() {
        if let Some(two) = from.offset(2 * dir, 0) {
            if board.is_empty(two) {
                targets.push(two);
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.is_color(to, color.opposite()) {
                targets.push(to);
            }
        }
    }
}

/// Single-step pieces (knight, king).
fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    targets: &mut SquareList,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if !board.is_color(to, color) {
                targets.push(to);
            }
        }
    }
}

/// Sliding pieces: walk each ray until the edge or the first piece, which is
/// included only when it belongs to the opponent.
fn ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    targets: &mut SquareList,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => targets.push(to),
                Some((_, c)) => {
                    if c != color {
                        targets.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
