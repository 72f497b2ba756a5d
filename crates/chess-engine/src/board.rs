//! Mailbox board representation.

use chess_core::{Color, FenError, FenParser, Move, Piece, Square};
use std::fmt;

/// Contents of one board cell.
pub type Cell = Option<(Piece, Color)>;

/// The 8x8 board as 64 cells, indexed by [`Square`].
///
/// The board carries no side to move; turn order belongs to the
/// [`GameSession`](crate::GameSession) that owns it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates the standard starting layout, Black on rows 0-1.
    pub fn initial() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize * 8;
            let pawns = color.pawn_row() as usize * 8;
            for (col, piece) in BACK_RANK.into_iter().enumerate() {
                board.cells[back + col] = Some((piece, color));
                board.cells[pawns + col] = Some((Piece::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from the placement field of a FEN string.
    ///
    /// Any other FEN fields are validated by the parser but not stored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Board::from_cells(FenParser::parse(fen)?.cells()))
    }

    /// Creates a board from cells in index order (a8 first).
    pub const fn from_cells(cells: [Cell; 64]) -> Self {
        Board { cells }
    }

    /// Returns the piece placement as a FEN field.
    pub fn to_fen(&self) -> String {
        FenParser::placement_from_cells(&self.cells)
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.index() as usize]
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if a piece of `color` stands on the square.
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((_, c)) if c == color)
    }

    /// Places (or clears, with `None`) the contents of a square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index() as usize] = cell;
    }

    /// All 64 cells in index order.
    pub fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    /// Iterates over the occupied squares of one color in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((piece, c)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Returns the first square, in index order, holding the king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Moves the piece on `m.from()` to `m.to()` and returns what was captured.
    ///
    /// No rules are checked here. Pass the returned cell to
    /// [`unmake_move`](Board::unmake_move) to restore the previous board exactly.
    #[inline]
    pub fn make_move(&mut self, m: Move) -> Cell {
        let from = m.from().index() as usize;
        let to = m.to().index() as usize;
        let captured = self.cells[to];
        self.cells[to] = self.cells[from].take();
        captured
    }

    /// Reverts a [`make_move`](Board::make_move).
    #[inline]
    pub fn unmake_move(&mut self, m: Move, captured: Cell) {
        let from = m.from().index() as usize;
        let to = m.to().index() as usize;
        self.cells[from] = self.cells[to];
        self.cells[to] = captured;
    }

    /// Returns a copy of the board with the move applied.
    pub fn with_move(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.make_move(m);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.cells.chunks(8).enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in rank {
                let c = match cell {
                    Some((piece, color)) => piece.to_fen_char(*color),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
