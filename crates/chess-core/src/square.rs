//! Board square representation.

use std::fmt;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7), which is also the board column.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the board row of this rank (rank 8 is row 0).
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed row-major from the top of the board as it is drawn,
/// `index = row * 8 + col`:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// Row 0 holds Black's back rank in the initial layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.row() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from row and column, each 0-7.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = top).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square(row as u8 * 8 + col as u8))
        }
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.col()) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(7 - self.row()) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// True for the dark squares of the board (a1, c1, ..., h8).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    // Common squares
    pub const A8: Square = Square(0);
    pub const E8: Square = Square(4);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const E1: Square = Square(60);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 36);
        assert_eq!((e4.row(), e4.col()), (4, 4));
    }

    #[test]
    fn row_zero_is_rank_eight() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H1.index(), 63);
        assert_eq!(Square::new(File::E, Rank::R2).index(), 52);
        assert_eq!(Square::from_coords(0, 4), Some(Square::E8));
        assert_eq!(Square::from_coords(8, 0), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(
            Square::from_algebraic("e4"),
            Some(Square::new(File::E, Rank::R4))
        );
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "a1");
        assert_eq!(Square::H8.to_algebraic(), "h8");
        assert_eq!(Square::new(File::E, Rank::R4).to_algebraic(), "e4");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::E1.offset(-1, 0), Square::from_algebraic("e2"));
        assert_eq!(Square::E8.offset(2, 1), Square::from_algebraic("f6"));
    }

    #[test]
    fn square_colors() {
        assert!(Square::A1.is_dark());
        assert!(Square::H8.is_dark());
        assert!(!Square::A8.is_dark());
        assert!(!Square::H1.is_dark());
    }

    #[test]
    fn all_squares_in_order() {
        let squares: Vec<u8> = Square::all().map(Square::index).collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    proptest::proptest! {
        #[test]
        fn coords_and_notation_agree(row in 0u8..8, col in 0u8..8) {
            let sq = Square::from_coords(row, col).unwrap();
            proptest::prop_assert_eq!(sq.index(), row * 8 + col);
            proptest::prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
            proptest::prop_assert_eq!(sq.rank().row(), row);
        }
    }
}
