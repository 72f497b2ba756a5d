//! Move generation.
//!
//! Two layers:
//! - [`basic_moves`]: pseudo-legal destinations of one piece, ignoring
//!   whether its own king ends up attacked.
//! - [`legal_moves`] / [`all_legal_moves`]: the basic moves that do not leave
//!   the mover's king in check.
//!
//! The rule set is deliberately reduced: no castling, no en passant and no
//! promotion.

mod attacks;
mod pieces;

use crate::check::is_king_in_check;
use crate::Board;
use chess_core::{Color, Move, Square};

pub(crate) use attacks::is_attacked_by;
pub use pieces::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};

/// Destinations of a single piece, in generation order.
///
/// A queen in the middle of an empty board has 27 destinations, so a small
/// fixed array avoids heap allocations during search.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Upper bound on the destinations of one piece.
    pub const MAX_SQUARES: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::A8; Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns true if the square is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Retains only squares for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::new(Square::A8, Square::A8); Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Pseudo-legal destinations for the piece on `from`.
///
/// Returns an empty list for an empty square. Destinations come out in the
/// order of the piece's direction table.
pub fn basic_moves(board: &Board, from: Square) -> SquareList {
    let mut targets = SquareList::new();
    if let Some((piece, color)) = board.piece_at(from) {
        pieces::generate(board, from, piece, color, &mut targets);
    }
    targets
}

/// Destinations for the piece on `from` that do not leave its own king in
/// check.
///
/// The result is always a subsequence of [`basic_moves`]. Each candidate is
/// tried on a scratch copy with make/unmake, so `board` is never touched.
pub fn legal_moves(board: &Board, from: Square) -> SquareList {
    let mut targets = basic_moves(board, from);
    let Some((_, color)) = board.piece_at(from) else {
        return targets;
    };

    let mut scratch = board.clone();
    targets.retain(|to| {
        let m = Move::new(from, to);
        let captured = scratch.make_move(m);
        let safe = !is_king_in_check(&scratch, color);
        scratch.unmake_move(m, captured);
        safe
    });
    targets
}

/// Every legal move of `color`, by source square index then generation order.
pub fn all_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces(color) {
        for &to in &legal_moves(board, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Returns true if `color` has at least one legal move.
///
/// Stops at the first legal move found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}
