use std::fmt;

use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8×8 grid of occupants, indexed `[row][col]`.
///
/// A board can be built freely with [`Board::place`] before it is handed to a
/// [`GameState`](crate::state::GameState); from then on only the move
/// executor writes to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement.
    pub fn new() -> Self {
        let mut board = Board::empty();

        // White on rows 0-1, black mirrored on rows 7-6
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.place(Square::new(col, 0), Piece::new(piece_type, Color::White));
            board.place(Square::new(col, 1), Piece::new(PieceType::Pawn, Color::White));
            board.place(Square::new(col, 6), Piece::new(PieceType::Pawn, Color::Black));
            board.place(Square::new(col, 7), Piece::new(piece_type, Color::Black));
        }
        board
    }

    /// Put a piece on a square, replacing whatever was there. Off-board
    /// squares are ignored.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Builder form of [`Board::place`].
    pub fn with(mut self, sq: Square, piece: Piece) -> Self {
        self.place(sq, piece);
        self
    }

    /// Occupant of `sq`; `None` for an empty or off-board square.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub(crate) fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = occupant;
        }
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let occupant = self.get(sq);
        self.set(sq, None);
        occupant
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.piece_type == PieceType::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

/// Rank 8 on top, `.` for an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let glyph = self
                    .get(Square::new(col, row))
                    .map(|p| p.symbol())
                    .unwrap_or('.');
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
